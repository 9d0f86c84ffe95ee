//! ui::comments
//!
//! Render model and HTML for the comments region.
//!
//! The region holds the existing comments and, when allowed, a form to add
//! one. With no comments and no form it renders to the empty string.

use chrono::{DateTime, Utc};

use super::avatar::avatar_url;
use super::html::escape;
use crate::core::config::Config;
use crate::core::routes::problem_comments_path;
use crate::core::types::{App, Problem};
use crate::policy::CommentVisibility;

/// Heading of the new-comment form.
pub const NEW_COMMENT_HEADING: &str = "Add a comment";

/// One existing comment, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub author: String,
    pub avatar_url: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Contents of the comments region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsRegion {
    /// Existing comments in creation order
    pub comments: Vec<CommentView>,
    /// Form target, if a new comment may be added
    pub form_action: Option<String>,
}

/// Build the comments region model.
pub fn comments_region(
    app: &App,
    problem: &Problem,
    visibility: CommentVisibility,
    config: &Config,
) -> CommentsRegion {
    let comments = if visibility.show_existing {
        problem
            .comments
            .iter()
            .map(|comment| CommentView {
                author: comment.author.name.clone(),
                avatar_url: avatar_url(&comment.author, config),
                body: comment.body.clone(),
                created_at: comment.created_at,
            })
            .collect()
    } else {
        Vec::new()
    };

    CommentsRegion {
        comments,
        form_action: visibility
            .show_form
            .then(|| problem_comments_path(app, problem)),
    }
}

impl CommentsRegion {
    /// True when there is nothing to render.
    pub fn is_blank(&self) -> bool {
        self.comments.is_empty() && self.form_action.is_none()
    }

    /// Render the region as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        if !self.comments.is_empty() {
            out.push_str("<ul class=\"comments\">\n");
            for comment in &self.comments {
                out.push_str("<li class=\"comment\">");
                if let Some(url) = &comment.avatar_url {
                    out.push_str(&format!(
                        r#"<img class="gravatar" src="{}" alt="{}">"#,
                        escape(url),
                        escape(&comment.author)
                    ));
                }
                out.push_str(&format!(
                    r#"<span class="author">{}</span> <span class="time">{}</span><p>{}</p>"#,
                    escape(&comment.author),
                    comment.created_at.format("%b %d, %Y %H:%M"),
                    escape(&comment.body)
                ));
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }

        if let Some(action) = &self.form_action {
            out.push_str(&format!(
                concat!(
                    r#"<form action="{}" method="post" class="new_comment">"#,
                    "<h3>{}</h3>",
                    r#"<textarea name="comment[body]"></textarea>"#,
                    r#"<input type="submit" value="Save Comment">"#,
                    "</form>\n"
                ),
                escape(action),
                NEW_COMMENT_HEADING
            ));
        }

        out
    }
}
