//! core
//!
//! Core domain types, configuration, and routing.
//!
//! # Modules
//!
//! - [`types`] - App, Problem, Comment, User, GithubRepo
//! - [`config`] - Configuration schema and loading
//! - [`routes`] - Path builders for view links
//! - [`snapshot`] - Render snapshot files for the command line
//!
//! # Design Principles
//!
//! - Validated types reject malformed references at parse time
//! - Schemas are strict (`deny_unknown_fields`)
//! - Configuration is passed explicitly, never read from globals

pub mod config;
pub mod routes;
pub mod snapshot;
pub mod types;
