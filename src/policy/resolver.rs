//! policy::resolver
//!
//! Composes the individual policies into the values a detail view renders.
//!
//! # Invariants
//!
//! - Resolution is pure: same snapshot and registry, same [`Presentation`]
//! - Absent optional data (tracker, GitHub identity, referer) is a valid
//!   state, never an error
//! - The resolver holds no per-request state and may be shared freely
//!
//! # Example
//!
//! ```
//! use errview::core::config::Config;
//! use errview::core::types::{App, Problem, User};
//! use errview::policy::{PresentationResolver, RenderSnapshot};
//! use errview::tracker::TrackerRegistry;
//!
//! let registry = TrackerRegistry::with_builtins();
//! let resolver = PresentationResolver::new(&registry);
//!
//! let app = App::new("a1");
//! let problem = Problem::new("p1");
//! let user = User::default();
//! let config = Config::default();
//!
//! let presentation = resolver.resolve(&RenderSnapshot {
//!     app: &app,
//!     problem: &problem,
//!     user: &user,
//!     config: &config,
//!     referer: None,
//! });
//!
//! assert!(presentation.confirm_resolve);
//! assert_eq!(presentation.up_link_href, "/apps/a1/problems");
//! assert!(presentation.create_issue_target.is_none());
//! assert!(presentation.comment_visibility.show_form);
//! ```

use serde::Serialize;

use super::comments::{comment_visibility, CommentVisibility};
use super::confirm::should_confirm_resolve;
use super::issue::{create_issue_target, CreateIssueTarget};
use super::navigation::resolve_up_link;
use crate::core::config::Config;
use crate::core::routes::app_problems_path;
use crate::core::types::{App, Problem, User};
use crate::tracker::TrackerRegistry;

/// Everything one detail-page render depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub app: &'a App,
    pub problem: &'a Problem,
    pub user: &'a User,
    pub config: &'a Config,
    /// Raw HTTP referer header, if the request carried one
    pub referer: Option<&'a str>,
}

/// Resolved presentation decisions for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Ask before resolving the problem
    pub confirm_resolve: bool,
    /// Target of the "up" link
    pub up_link_href: String,
    /// Create-issue affordance, if any
    pub create_issue_target: Option<CreateIssueTarget>,
    /// Comments region contents
    pub comment_visibility: CommentVisibility,
}

/// Resolves [`Presentation`]s against a tracker registry.
#[derive(Debug, Clone, Copy)]
pub struct PresentationResolver<'r> {
    registry: &'r TrackerRegistry,
}

impl<'r> PresentationResolver<'r> {
    pub fn new(registry: &'r TrackerRegistry) -> Self {
        Self { registry }
    }

    /// Resolve every presentation decision for `snapshot`.
    pub fn resolve(&self, snapshot: &RenderSnapshot<'_>) -> Presentation {
        let fallback = app_problems_path(snapshot.app);
        let tracker = self
            .registry
            .active_tracker(snapshot.app.issue_tracker.as_ref());

        let presentation = Presentation {
            confirm_resolve: should_confirm_resolve(snapshot.config),
            up_link_href: resolve_up_link(snapshot.referer, &fallback),
            create_issue_target: create_issue_target(
                snapshot.app,
                snapshot.user,
                snapshot.problem,
                tracker.as_deref(),
            ),
            comment_visibility: comment_visibility(snapshot.config, tracker.as_deref()),
        };

        tracing::debug!(
            app = %snapshot.app.id,
            problem = %snapshot.problem.id,
            ?presentation,
            "resolved presentation"
        );

        presentation
    }
}
