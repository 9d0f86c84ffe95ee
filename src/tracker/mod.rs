//! tracker
//!
//! Issue tracker plugins and the registry that resolves them.
//!
//! # Architecture
//!
//! Apps reference a tracker by type tag plus options
//! ([`IssueTrackerConfig`](crate::core::types::IssueTrackerConfig)).
//! Policies never name a concrete plugin; they ask the [`TrackerRegistry`]
//! for the app's active tracker and talk to it through [`IssueTracker`].
//!
//! # Modules
//!
//! - `traits`: The `IssueTracker` capability trait
//! - `registry`: Tag to factory mapping and resolution
//! - [`builtin`]: GitHub, Pivotal, and "none" plugins
//! - [`mock`]: Fixed-answer tracker for deterministic testing

pub mod builtin;
pub mod mock;
mod registry;
mod traits;

pub use registry::{TrackerFactory, TrackerRegistry};
pub use traits::IssueTracker;
