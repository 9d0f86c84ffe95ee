//! policy::issue
//!
//! Whether the detail page offers to create an external issue, and where.
//!
//! # Decision Order
//!
//! First match wins:
//! 1. The problem already has an issue link: offer nothing.
//! 2. The app has a registered and configured tracker: offer that tracker,
//!    even if the personal GitHub integration would also be available.
//! 3. The user has a linked GitHub identity and the app has a GitHub repo:
//!    offer the personal GitHub integration.
//! 4. Otherwise offer nothing.
//!
//! Step 2 must stay ahead of step 3.

use serde::Serialize;

use crate::core::types::{App, Problem, User};
use crate::tracker::{IssueTracker, TrackerRegistry};

/// Backend a "create issue" link targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreateIssueTarget {
    /// The app's tracker plugin.
    Tracker {
        /// The plugin's label
        label: String,
    },
    /// The built-in GitHub integration using the user's own credentials.
    #[serde(rename = "github")]
    GitHub,
}

impl CreateIssueTarget {
    /// DOM/CSS hook for the link: `<label>_create` or `github_create`.
    ///
    /// # Example
    ///
    /// ```
    /// use errview::policy::CreateIssueTarget;
    ///
    /// let target = CreateIssueTarget::Tracker { label: "pivotal".into() };
    /// assert_eq!(target.css_hook(), "pivotal_create");
    /// assert_eq!(CreateIssueTarget::GitHub.css_hook(), "github_create");
    /// ```
    pub fn css_hook(&self) -> String {
        match self {
            CreateIssueTarget::Tracker { label } => format!("{label}_create"),
            CreateIssueTarget::GitHub => "github_create".to_string(),
        }
    }
}

/// Decide which create-issue affordance, if any, the page shows.
pub fn resolve_create_issue_target(
    app: &App,
    user: &User,
    problem: &Problem,
    registry: &TrackerRegistry,
) -> Option<CreateIssueTarget> {
    let tracker = registry.active_tracker(app.issue_tracker.as_ref());
    create_issue_target(app, user, problem, tracker.as_deref())
}

/// Same decision with the app's active tracker already resolved.
pub(crate) fn create_issue_target(
    app: &App,
    user: &User,
    problem: &Problem,
    tracker: Option<&dyn IssueTracker>,
) -> Option<CreateIssueTarget> {
    if problem.issue_link().is_some() {
        tracing::debug!(problem = %problem.id, "issue already linked");
        return None;
    }

    if let Some(tracker) = tracker {
        return Some(CreateIssueTarget::Tracker {
            label: tracker.label().to_string(),
        });
    }

    if user.github_identity().is_some() && app.github_repo.is_some() {
        return Some(CreateIssueTarget::GitHub);
    }

    None
}
