//! tracker::traits
//!
//! The capability contract every issue tracker plugin implements.
//!
//! # Design
//!
//! Trackers are an open set of plugins identified by a type tag. The view
//! only needs three read-only answers from a plugin, so the trait is
//! small and synchronous. Calls must be side-effect free; they are made
//! while rendering.
//!
//! # Example
//!
//! ```
//! use errview::tracker::IssueTracker;
//!
//! #[derive(Debug)]
//! struct Jira;
//!
//! impl IssueTracker for Jira {
//!     fn label(&self) -> &str {
//!         "jira"
//!     }
//!     fn configured(&self) -> bool {
//!         true
//!     }
//!     fn comments_allowed(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let tracker: Box<dyn IssueTracker> = Box::new(Jira);
//! assert_eq!(tracker.label(), "jira");
//! ```

use std::fmt::Debug;

/// An issue tracker integration as seen by the detail view.
pub trait IssueTracker: Debug + Send + Sync {
    /// Short identifier used to derive DOM hooks (e.g. `pivotal`).
    fn label(&self) -> &str;

    /// Whether the plugin has everything it needs to file issues.
    fn configured(&self) -> bool;

    /// Whether users may keep commenting locally while this tracker is active.
    fn comments_allowed(&self) -> bool;
}
