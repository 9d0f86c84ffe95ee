//! policy::comments
//!
//! Whether existing comments are shown and whether new ones may be added.
//!
//! Existing comments are always shown. Only the new-comment form is gated:
//! it is hidden when the app's active tracker disallows comments and the
//! `allow_comments_with_issue_tracker` override is off.

use serde::Serialize;

use crate::core::config::Config;
use crate::core::types::App;
use crate::tracker::{IssueTracker, TrackerRegistry};

/// What the comments region may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentVisibility {
    /// Show the list of existing comments
    pub show_existing: bool,
    /// Offer the new-comment form
    pub show_form: bool,
}

/// Decide what the comments region shows for `app`.
pub fn resolve_comment_visibility(
    app: &App,
    config: &Config,
    registry: &TrackerRegistry,
) -> CommentVisibility {
    let tracker = registry.active_tracker(app.issue_tracker.as_ref());
    comment_visibility(config, tracker.as_deref())
}

/// Same decision with the app's active tracker already resolved.
pub(crate) fn comment_visibility(
    config: &Config,
    tracker: Option<&dyn IssueTracker>,
) -> CommentVisibility {
    let show_form = match tracker {
        None => true,
        Some(tracker) => tracker.comments_allowed() || config.allow_comments_with_issue_tracker(),
    };

    CommentVisibility {
        show_existing: true,
        show_form,
    }
}
