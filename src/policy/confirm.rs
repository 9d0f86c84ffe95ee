//! policy::confirm
//!
//! Whether the "resolve" action asks the user to confirm.

use crate::core::config::Config;

/// Returns `true` unless `confirm_err_actions` is explicitly `false`.
///
/// An unset value counts as `true`.
///
/// # Example
///
/// ```
/// use errview::core::config::{Config, ViewConfig};
/// use errview::policy::should_confirm_resolve;
///
/// assert!(should_confirm_resolve(&Config::default()));
///
/// let off = Config::new(ViewConfig {
///     confirm_err_actions: Some(false),
///     ..Default::default()
/// });
/// assert!(!should_confirm_resolve(&off));
/// ```
pub fn should_confirm_resolve(config: &Config) -> bool {
    config.confirm_err_actions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ViewConfig;

    fn config(confirm: Option<bool>) -> Config {
        Config::new(ViewConfig {
            confirm_err_actions: confirm,
            ..Default::default()
        })
    }

    #[test]
    fn unset_confirms() {
        assert!(should_confirm_resolve(&config(None)));
    }

    #[test]
    fn true_confirms() {
        assert!(should_confirm_resolve(&config(Some(true))));
    }

    #[test]
    fn false_does_not_confirm() {
        assert!(!should_confirm_resolve(&config(Some(false))));
    }
}
