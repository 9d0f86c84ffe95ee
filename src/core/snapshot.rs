//! core::snapshot
//!
//! On-disk render snapshot used by the command line.
//!
//! # Format
//!
//! ```toml
//! referer = "http://localhost:3000/problems"
//!
//! [app]
//! id = "a1"
//! name = "Storefront"
//! github_repo = "foo/bar"
//!
//! [app.issue_tracker]
//! type_tracker = "pivotal"
//!
//! [app.issue_tracker.options]
//! api_token = "token"
//! project_id = "1234"
//!
//! [problem]
//! id = "p1"
//!
//! [[problem.comments]]
//! body = "Test comment"
//! created_at = "2024-01-01T12:00:00Z"
//! author = { name = "Ada", email = "ada@example.com" }
//!
//! [user]
//! github_login = "test_user"
//! github_oauth_token = "abcdef"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::Config;
use super::types::{App, Problem, User};
use crate::policy::RenderSnapshot;

/// Errors from loading a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse snapshot '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// Owned snapshot data as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotFile {
    pub app: App,
    pub problem: Problem,
    /// Viewing user; absent means an account with no linked identities
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub referer: Option<String>,
}

impl SnapshotFile {
    /// Load and validate a snapshot from `path`.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = fs::read_to_string(path).map_err(|e| SnapshotError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let snapshot: SnapshotFile =
            toml::from_str(&contents).map_err(|e| SnapshotError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that route identifiers are usable as path segments.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (what, id) in [("app.id", &self.app.id), ("problem.id", &self.problem.id)] {
            if id.trim().is_empty() {
                return Err(SnapshotError::Invalid(format!("{what} cannot be empty")));
            }
            if let Some(c) = id.chars().find(|c| !is_path_safe(*c)) {
                return Err(SnapshotError::Invalid(format!(
                    "{what} cannot contain '{c}': {id}"
                )));
            }
        }
        Ok(())
    }

    /// Borrow as a render snapshot. `referer` overrides the stored one.
    pub fn as_render<'a>(
        &'a self,
        config: &'a Config,
        referer: Option<&'a str>,
    ) -> RenderSnapshot<'a> {
        RenderSnapshot {
            app: &self.app,
            problem: &self.problem,
            user: &self.user,
            config,
            referer: referer.or(self.referer.as_deref()),
        }
    }
}

/// Unreserved URL characters; ids are spliced into paths unencoded.
fn is_path_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}
