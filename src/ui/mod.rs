//! ui
//!
//! Rendering layer for the problem detail view.
//!
//! # Modules
//!
//! - [`action_bar`] - Resolve, up, and create-issue links
//! - [`comments`] - Existing comments and the new-comment form
//! - [`avatar`] - Gravatar URLs for comment authors
//! - [`html`] - Escaping and anchor helpers
//! - [`output`] - Console output for the command line
//!
//! # Design
//!
//! Rendering consumes a resolved [`Presentation`](crate::policy::Presentation)
//! and makes no policy decisions of its own.

pub mod action_bar;
pub mod avatar;
pub mod comments;
pub mod html;
pub mod output;
