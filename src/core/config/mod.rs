//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The detail view reads a handful of process-wide flags. They are loaded
//! once at startup and then passed explicitly, read-only, to everything
//! that needs them.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. `ERRVIEW_*` environment variables
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. `$ERRVIEW_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/errview/config.toml`
//! 3. `~/.errview/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use errview::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let config = result.config;
//!
//! println!("Confirm resolve: {}", config.confirm_err_actions());
//! println!("Gravatar: {}", config.use_gravatar());
//! ```

pub mod schema;

pub use schema::ViewConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ERRVIEW_CONFIG";

const ENV_CONFIRM_ERR_ACTIONS: &str = "ERRVIEW_CONFIRM_ERR_ACTIONS";
const ENV_ALLOW_COMMENTS_WITH_ISSUE_TRACKER: &str = "ERRVIEW_ALLOW_COMMENTS_WITH_ISSUE_TRACKER";
const ENV_USE_GRAVATAR: &str = "ERRVIEW_USE_GRAVATAR";
const ENV_GRAVATAR_DEFAULT: &str = "ERRVIEW_GRAVATAR_DEFAULT";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Effective configuration.
///
/// Accessor methods apply defaults for unset values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw values after file and environment layering
    pub view: ViewConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Wrap already-layered values.
    pub fn new(view: ViewConfig) -> Self {
        Self { view, path: None }
    }

    /// Load configuration from default locations and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, an
    /// environment override is malformed, or a value fails validation.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `env` to look up environment variables.
    pub fn load_with<F>(env: F) -> Result<ConfigLoadResult, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let (mut view, path) = Self::load_file(&env, &mut warnings)?;
        apply_env_overrides(&mut view, &env)?;
        view.validate()?;

        tracing::debug!(path = ?path, "loaded view config");

        Ok(ConfigLoadResult {
            config: Config { view, path },
            warnings,
        })
    }

    /// Load configuration from an explicit file, then layer the process
    /// environment over it.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration from an explicit file using `env` for overrides.
    ///
    /// `$ERRVIEW_CONFIG` and the default locations are not consulted.
    pub fn load_from_path_with<F>(path: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut view = Self::read_config(path)?;
        apply_env_overrides(&mut view, &env)?;
        view.validate()?;

        tracing::debug!(path = %path.display(), "loaded view config from explicit path");

        Ok(Config {
            view,
            path: Some(path.to_path_buf()),
        })
    }

    fn load_file<F>(
        env: &F,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(ViewConfig, Option<PathBuf>), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. Check $ERRVIEW_CONFIG
        if let Some(path) = env(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: format!("{CONFIG_PATH_ENV} points to a missing file, ignoring it"),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/errview/config.toml
        if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("errview/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.errview/config.toml
        if let Ok(path) = Self::default_config_path() {
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((ViewConfig::default(), None))
    }

    fn read_config(path: &Path) -> Result<ViewConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config path, `~/.errview/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".errview/config.toml"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Whether destructive actions ask for confirmation.
    ///
    /// Defaults to `true` if not configured; only an explicit `false`
    /// turns it off.
    pub fn confirm_err_actions(&self) -> bool {
        self.view.confirm_err_actions.unwrap_or(true)
    }

    /// Whether new comments are allowed on apps whose tracker disallows them.
    ///
    /// Defaults to `true` if not configured.
    pub fn allow_comments_with_issue_tracker(&self) -> bool {
        self.view.allow_comments_with_issue_tracker.unwrap_or(true)
    }

    /// Whether comment avatars come from gravatar.
    ///
    /// Defaults to `true` if not configured.
    pub fn use_gravatar(&self) -> bool {
        self.view.use_gravatar.unwrap_or(true)
    }

    /// Gravatar fallback image style.
    ///
    /// Defaults to "identicon" if not configured.
    pub fn gravatar_default(&self) -> &str {
        self.view.gravatar_default.as_deref().unwrap_or("identicon")
    }

    /// Get the path of the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Layer `ERRVIEW_*` environment variables over file values.
fn apply_env_overrides<F>(view: &mut ViewConfig, env: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(ENV_CONFIRM_ERR_ACTIONS) {
        view.confirm_err_actions = Some(parse_bool(ENV_CONFIRM_ERR_ACTIONS, &value)?);
    }
    if let Some(value) = env(ENV_ALLOW_COMMENTS_WITH_ISSUE_TRACKER) {
        view.allow_comments_with_issue_tracker =
            Some(parse_bool(ENV_ALLOW_COMMENTS_WITH_ISSUE_TRACKER, &value)?);
    }
    if let Some(value) = env(ENV_USE_GRAVATAR) {
        view.use_gravatar = Some(parse_bool(ENV_USE_GRAVATAR, &value)?);
    }
    if let Some(value) = env(ENV_GRAVATAR_DEFAULT) {
        view.gravatar_default = Some(value);
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.confirm_err_actions());
        assert!(config.allow_comments_with_issue_tracker());
        assert!(config.use_gravatar());
        assert_eq!(config.gravatar_default(), "identicon");
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_env_path() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
            confirm_err_actions = false
            use_gravatar = false
            "#,
        );

        let result = Config::load_with(env_from(&[(CONFIG_PATH_ENV, path.to_str().unwrap())]))
            .unwrap();
        let config = result.config;

        assert!(!config.confirm_err_actions());
        assert!(!config.use_gravatar());
        assert!(config.allow_comments_with_issue_tracker());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_from_xdg() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("errview");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "allow_comments_with_issue_tracker = false").unwrap();

        let result =
            Config::load_with(env_from(&[("XDG_CONFIG_HOME", temp.path().to_str().unwrap())]))
                .unwrap();

        assert!(!result.config.allow_comments_with_issue_tracker());
    }

    #[test]
    fn env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "confirm_err_actions = false");

        let result = Config::load_with(env_from(&[
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
            (ENV_CONFIRM_ERR_ACTIONS, "TRUE"),
            (ENV_GRAVATAR_DEFAULT, "retro"),
        ]))
        .unwrap();

        assert!(result.config.confirm_err_actions());
        assert_eq!(result.config.gravatar_default(), "retro");
    }

    #[test]
    fn malformed_env_bool_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");

        let result = Config::load_with(env_from(&[
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
            (ENV_USE_GRAVATAR, "sometimes"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn invalid_env_gravatar_default_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");

        let result = Config::load_with(env_from(&[
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
            (ENV_GRAVATAR_DEFAULT, "kitten"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn missing_env_path_warns() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let result = Config::load_with(env_from(&[
            (CONFIG_PATH_ENV, missing.to_str().unwrap()),
            ("XDG_CONFIG_HOME", temp.path().to_str().unwrap()),
        ]))
        .unwrap();

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, missing);
    }

    #[test]
    fn explicit_path_still_layers_env() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "confirm_err_actions = true\nuse_gravatar = false");

        let config = Config::load_from_path_with(
            &path,
            env_from(&[(ENV_CONFIRM_ERR_ACTIONS, "false")]),
        )
        .unwrap();

        assert!(!config.confirm_err_actions());
        assert!(!config.use_gravatar());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn explicit_path_env_override_is_validated() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");

        let result = Config::load_from_path_with(
            &path,
            env_from(&[(ENV_GRAVATAR_DEFAULT, "kitten")]),
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "confirm_everything = true");

        let result = Config::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn unreadable_path_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_path(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn parse_bool_forms() {
        for value in ["true", "1", "yes", " Yes "] {
            assert!(parse_bool("K", value).unwrap());
        }
        for value in ["false", "0", "no", "FALSE"] {
            assert!(!parse_bool("K", value).unwrap());
        }
        assert!(parse_bool("K", "").is_err());
    }
}
