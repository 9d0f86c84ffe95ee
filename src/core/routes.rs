//! core::routes
//!
//! Path builders for the links the detail view emits.
//!
//! Route shapes live here so no other module formats `/apps/...` paths.
//!
//! # Example
//!
//! ```
//! use errview::core::routes::{app_problems_path, resolve_problem_path};
//! use errview::core::types::{App, Problem};
//!
//! let app = App::new("a1");
//! let problem = Problem::new("p9");
//!
//! assert_eq!(app_problems_path(&app), "/apps/a1/problems");
//! assert_eq!(resolve_problem_path(&app, &problem), "/apps/a1/problems/p9/resolve");
//! ```

use super::types::{App, Problem};

/// Query value selecting the personal GitHub integration on the
/// create-issue route.
pub const USER_GITHUB_TRACKER: &str = "user_github";

/// List of problems for an app. Fallback target for the "up" link.
pub fn app_problems_path(app: &App) -> String {
    format!("/apps/{}/problems", app.id)
}

/// Detail page of a single problem.
pub fn app_problem_path(app: &App, problem: &Problem) -> String {
    format!("{}/{}", app_problems_path(app), problem.id)
}

/// Resolve action for a problem.
pub fn resolve_problem_path(app: &App, problem: &Problem) -> String {
    format!("{}/resolve", app_problem_path(app, problem))
}

/// Create-issue action for a problem.
///
/// `tracker` selects a non-default integration (see [`USER_GITHUB_TRACKER`]).
pub fn create_issue_path(app: &App, problem: &Problem, tracker: Option<&str>) -> String {
    let base = format!("{}/issue", app_problem_path(app, problem));
    match tracker {
        Some(tracker) => format!("{base}?tracker={tracker}"),
        None => base,
    }
}

/// Comment creation endpoint for a problem.
pub fn problem_comments_path(app: &App, problem: &Problem) -> String {
    format!("{}/comments", app_problem_path(app, problem))
}
