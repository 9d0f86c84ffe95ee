//! tracker::builtin
//!
//! Tracker plugins registered by [`TrackerRegistry::with_builtins`].
//!
//! Each plugin is configured once all of its required options are
//! present (non-blank). None of the built-ins allow local comments; the
//! conversation is expected to move to the external issue.
//!
//! [`TrackerRegistry::with_builtins`]: super::TrackerRegistry::with_builtins

use super::traits::IssueTracker;
use crate::core::types::{present, TrackerOptions};

/// Returns true if every key in `required` has a non-blank value.
fn has_options(options: &TrackerOptions, required: &[&str]) -> bool {
    required
        .iter()
        .all(|key| present(options.get(*key).map(String::as_str)).is_some())
}

/// GitHub Issues, configured per app with a repository and token.
#[derive(Debug, Clone)]
pub struct GitHubTracker {
    configured: bool,
}

impl GitHubTracker {
    pub const TYPE: &'static str = "github";
    pub const REQUIRED_OPTIONS: &'static [&'static str] = &["api_token", "repo"];

    pub fn new(options: &TrackerOptions) -> Self {
        Self {
            configured: has_options(options, Self::REQUIRED_OPTIONS),
        }
    }
}

impl IssueTracker for GitHubTracker {
    fn label(&self) -> &str {
        Self::TYPE
    }

    fn configured(&self) -> bool {
        self.configured
    }

    fn comments_allowed(&self) -> bool {
        false
    }
}

/// Pivotal Tracker stories.
#[derive(Debug, Clone)]
pub struct PivotalTracker {
    configured: bool,
}

impl PivotalTracker {
    pub const TYPE: &'static str = "pivotal";
    pub const REQUIRED_OPTIONS: &'static [&'static str] = &["api_token", "project_id"];

    pub fn new(options: &TrackerOptions) -> Self {
        Self {
            configured: has_options(options, Self::REQUIRED_OPTIONS),
        }
    }
}

impl IssueTracker for PivotalTracker {
    fn label(&self) -> &str {
        Self::TYPE
    }

    fn configured(&self) -> bool {
        self.configured
    }

    fn comments_allowed(&self) -> bool {
        false
    }
}

/// Explicit "no tracker" choice. Never configured.
#[derive(Debug, Clone, Default)]
pub struct NoneTracker;

impl NoneTracker {
    pub const TYPE: &'static str = "none";
}

impl IssueTracker for NoneTracker {
    fn label(&self) -> &str {
        Self::TYPE
    }

    fn configured(&self) -> bool {
        false
    }

    fn comments_allowed(&self) -> bool {
        false
    }
}
