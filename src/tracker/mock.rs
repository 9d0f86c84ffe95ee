//! tracker::mock
//!
//! Fixed-answer tracker for deterministic testing.
//!
//! # Example
//!
//! ```
//! use errview::core::types::IssueTrackerConfig;
//! use errview::tracker::mock::MockTracker;
//! use errview::tracker::TrackerRegistry;
//!
//! let registry = TrackerRegistry::new().with(
//!     "pivotal",
//!     MockTracker::configured("pivotal").with_comments_allowed(true).factory(),
//! );
//!
//! let tracker = registry
//!     .active_tracker(Some(&IssueTrackerConfig::new("pivotal")))
//!     .unwrap();
//! assert!(tracker.comments_allowed());
//! ```

use super::traits::IssueTracker;
use crate::core::types::TrackerOptions;

/// Tracker whose answers are set up front and ignore options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTracker {
    label: String,
    configured: bool,
    comments_allowed: bool,
}

impl MockTracker {
    /// A configured tracker that does not allow comments.
    pub fn configured(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            configured: true,
            comments_allowed: false,
        }
    }

    /// A registered tracker that is missing its settings.
    pub fn unconfigured(label: impl Into<String>) -> Self {
        Self {
            configured: false,
            ..Self::configured(label)
        }
    }

    /// Set whether comments are allowed.
    pub fn with_comments_allowed(mut self, allowed: bool) -> Self {
        self.comments_allowed = allowed;
        self
    }

    /// A factory that hands out clones of this tracker.
    pub fn factory(
        self,
    ) -> impl Fn(&TrackerOptions) -> Box<dyn IssueTracker> + Send + Sync + 'static {
        move |_options: &TrackerOptions| Box::new(self.clone()) as Box<dyn IssueTracker>
    }
}

impl IssueTracker for MockTracker {
    fn label(&self) -> &str {
        &self.label
    }

    fn configured(&self) -> bool {
        self.configured
    }

    fn comments_allowed(&self) -> bool {
        self.comments_allowed
    }
}
