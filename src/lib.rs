//! errview - Presentation policy for error report detail views
//!
//! errview decides how the detail page of an error report ("problem")
//! presents itself: whether resolving asks for confirmation, where the
//! "up" link points, whether a "create issue" link is offered and for
//! which backend, and whether users may read and add comments.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, configuration, routes, snapshot files
//! - [`tracker`] - Issue tracker capability trait and plugin registry
//! - [`policy`] - Pure decision rules and the presentation resolver
//! - [`ui`] - Render models and HTML fragments
//! - [`cli`] - Command-line interface
//!
//! # Invariants
//!
//! 1. Policies are total: missing optional data never produces an error
//! 2. A configured app tracker takes precedence over personal GitHub linkage
//! 3. An existing issue link always suppresses the create-issue link
//! 4. Existing comments are always shown, in creation order

pub mod cli;
pub mod core;
pub mod policy;
pub mod tracker;
pub mod ui;
