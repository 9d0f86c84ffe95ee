//! ui::action_bar
//!
//! Render model and HTML for the detail page's action bar.
//!
//! # Design
//!
//! Pure functions: they take the resolved [`Presentation`] plus the
//! app and problem for routing, and return a model or a string. No
//! decisions are made here beyond mapping the presentation onto links.
//!
//! # Example Output
//!
//! ```html
//! <span><a href="/apps/a1/problems/p1/resolve" class="resolve" data-method="put" data-confirm="Seriously?">resolve</a></span>
//! <span><a href="/apps/a1/problems" class="up">up</a></span>
//! <span><a href="/apps/a1/problems/p1/issue" class="pivotal_create create-issue">create issue</a></span>
//! ```

use super::html::anchor;
use crate::core::routes::{create_issue_path, resolve_problem_path, USER_GITHUB_TRACKER};
use crate::core::types::{App, Problem};
use crate::policy::{CreateIssueTarget, Presentation};

/// Prompt shown before resolving a single problem.
pub const RESOLVE_CONFIRM_MESSAGE: &str = "Seriously?";

/// `data-confirm` value emitted when confirmation is turned off.
pub const NO_CONFIRM: &str = "null";

/// The resolve link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveLink {
    pub href: String,
    /// Confirmation prompt, if the action asks for one
    pub confirm: Option<&'static str>,
}

/// The create-issue link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueLink {
    pub href: String,
    /// Backend-specific hook, e.g. `pivotal_create`
    pub css_hook: String,
}

/// Links shown in the action bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBar {
    pub resolve: ResolveLink,
    pub up_href: String,
    pub create_issue: Option<CreateIssueLink>,
}

/// Build the action bar model.
pub fn action_bar(app: &App, problem: &Problem, presentation: &Presentation) -> ActionBar {
    let create_issue = presentation
        .create_issue_target
        .as_ref()
        .map(|target| {
            let tracker = match target {
                CreateIssueTarget::Tracker { .. } => None,
                CreateIssueTarget::GitHub => Some(USER_GITHUB_TRACKER),
            };
            CreateIssueLink {
                href: create_issue_path(app, problem, tracker),
                css_hook: target.css_hook(),
            }
        });

    ActionBar {
        resolve: ResolveLink {
            href: resolve_problem_path(app, problem),
            confirm: presentation
                .confirm_resolve
                .then_some(RESOLVE_CONFIRM_MESSAGE),
        },
        up_href: presentation.up_link_href.clone(),
        create_issue,
    }
}

impl ActionBar {
    /// Render the action bar as an HTML fragment, one `<span>` per line.
    pub fn to_html(&self) -> String {
        let mut lines = vec![
            span(&anchor(
                &self.resolve.href,
                "resolve",
                "resolve",
                &[
                    ("method", "put"),
                    ("confirm", self.resolve.confirm.unwrap_or(NO_CONFIRM)),
                ],
            )),
            span(&anchor(&self.up_href, "up", "up", &[])),
        ];

        if let Some(link) = &self.create_issue {
            let class = format!("{} create-issue", link.css_hook);
            lines.push(span(&anchor(&link.href, &class, "create issue", &[])));
        }

        lines.join("\n")
    }
}

fn span(inner: &str) -> String {
    format!("<span>{inner}</span>")
}
