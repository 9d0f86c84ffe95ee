//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `$ERRVIEW_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/errview/config.toml`
//! 3. `~/.errview/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing and after environment
//! overrides are applied.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Detail view configuration.
///
/// Every field is optional; unset values fall back to the defaults
/// applied by [`super::Config`].
///
/// # Example
///
/// ```toml
/// confirm_err_actions = true
/// allow_comments_with_issue_tracker = false
/// use_gravatar = true
/// gravatar_default = "identicon"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Ask for confirmation before destructive problem actions
    pub confirm_err_actions: Option<bool>,

    /// Allow new comments even when the app's tracker disallows them
    pub allow_comments_with_issue_tracker: Option<bool>,

    /// Show gravatar avatars next to comments
    pub use_gravatar: Option<bool>,

    /// Gravatar fallback image style
    pub gravatar_default: Option<String>,
}

impl ViewConfig {
    /// Fallback styles accepted by gravatar's `d=` parameter.
    pub const VALID_GRAVATAR_DEFAULTS: &'static [&'static str] = &[
        "404",
        "mp",
        "identicon",
        "monsterid",
        "wavatar",
        "retro",
        "robohash",
        "blank",
    ];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(style) = &self.gravatar_default {
            if !Self::VALID_GRAVATAR_DEFAULTS.contains(&style.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid gravatar_default '{}', must be one of: {}",
                    style,
                    Self::VALID_GRAVATAR_DEFAULTS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
