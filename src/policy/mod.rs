//! policy
//!
//! Presentation decisions for the problem detail view.
//!
//! # Modules
//!
//! - `confirm` - Whether "resolve" asks for confirmation
//! - `navigation` - Target of the "up" link
//! - `issue` - Create-issue affordance and its backend
//! - `comments` - Comment list and new-comment form visibility
//! - `resolver` - Composes the above into one [`Presentation`]
//!
//! # Design
//!
//! Every policy is a total, synchronous function of its inputs. None
//! returns an error; missing data always has a defined fallthrough.
//! Configuration and the tracker registry are passed in explicitly.

mod comments;
mod confirm;
mod issue;
mod navigation;
mod resolver;

pub use comments::{resolve_comment_visibility, CommentVisibility};
pub use confirm::should_confirm_resolve;
pub use issue::{resolve_create_issue_target, CreateIssueTarget};
pub use navigation::resolve_up_link;
pub use resolver::{Presentation, PresentationResolver, RenderSnapshot};
