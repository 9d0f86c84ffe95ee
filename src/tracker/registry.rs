//! tracker::registry
//!
//! Maps tracker type tags to plugin factories.
//!
//! # Design
//!
//! An app stores only a type tag and an options map. The registry turns
//! that reference into a live [`IssueTracker`] by calling the factory
//! registered under the tag with the app's options.
//!
//! A tag the registry does not know is not an error: the app is treated
//! as having no configured tracker so the detail view always renders.
//! The mismatch is logged at `warn` level because it usually means a
//! plugin was removed while apps still reference it.
//!
//! # Example
//!
//! ```
//! use errview::core::types::IssueTrackerConfig;
//! use errview::tracker::TrackerRegistry;
//!
//! let registry = TrackerRegistry::with_builtins();
//!
//! let config = IssueTrackerConfig::new("pivotal")
//!     .with_option("api_token", "secret")
//!     .with_option("project_id", "1234");
//! let tracker = registry.active_tracker(Some(&config)).unwrap();
//! assert_eq!(tracker.label(), "pivotal");
//!
//! // Unknown tags resolve to nothing
//! let unknown = IssueTrackerConfig::new("bugzilla");
//! assert!(registry.active_tracker(Some(&unknown)).is_none());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::builtin::{GitHubTracker, NoneTracker, PivotalTracker};
use super::traits::IssueTracker;
use crate::core::types::{IssueTrackerConfig, TrackerOptions};

/// Builds a tracker instance from an app's tracker options.
pub type TrackerFactory = Arc<dyn Fn(&TrackerOptions) -> Box<dyn IssueTracker> + Send + Sync>;

/// Registry of tracker plugins keyed by type tag.
///
/// Read-only once built; share it by reference across renders.
#[derive(Clone, Default)]
pub struct TrackerRegistry {
    factories: BTreeMap<String, TrackerFactory>,
}

impl TrackerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in plugins
    /// (`github`, `pivotal`, `none`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(GitHubTracker::TYPE, |options| {
            Box::new(GitHubTracker::new(options))
        });
        registry.register(PivotalTracker::TYPE, |options| {
            Box::new(PivotalTracker::new(options))
        });
        registry.register(NoneTracker::TYPE, |_| Box::new(NoneTracker));
        registry
    }

    /// Register a factory under `type_tracker`, replacing any previous one.
    pub fn register<F>(&mut self, type_tracker: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&TrackerOptions) -> Box<dyn IssueTracker> + Send + Sync + 'static,
    {
        self.factories.insert(type_tracker.into(), Arc::new(factory));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<F>(mut self, type_tracker: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&TrackerOptions) -> Box<dyn IssueTracker> + Send + Sync + 'static,
    {
        self.register(type_tracker, factory);
        self
    }

    /// Find the factory registered under `type_tracker`.
    ///
    /// Tags match exactly (case-sensitive).
    pub fn lookup(&self, type_tracker: &str) -> Option<&TrackerFactory> {
        self.factories.get(type_tracker)
    }

    /// Check whether a tag is registered.
    pub fn contains(&self, type_tracker: &str) -> bool {
        self.factories.contains_key(type_tracker)
    }

    /// Registered tags in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Instantiate the plugin an app references.
    ///
    /// Returns `None` (and logs a warning) if the tag is unknown.
    pub fn instantiate(&self, config: &IssueTrackerConfig) -> Option<Box<dyn IssueTracker>> {
        match self.lookup(&config.type_tracker) {
            Some(factory) => Some(factory(&config.options)),
            None => {
                tracing::warn!(
                    type_tracker = %config.type_tracker,
                    "app references an unregistered issue tracker; treating it as not configured"
                );
                None
            }
        }
    }

    /// The app's tracker, if it is both registered and configured.
    pub fn active_tracker(
        &self,
        config: Option<&IssueTrackerConfig>,
    ) -> Option<Box<dyn IssueTracker>> {
        let tracker = self.instantiate(config?)?;
        if tracker.configured() {
            Some(tracker)
        } else {
            tracing::debug!(label = tracker.label(), "issue tracker is not configured");
            None
        }
    }
}

impl fmt::Debug for TrackerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::mock::MockTracker;

    mod builtins {
        use super::*;

        #[test]
        fn registers_known_types() {
            let registry = TrackerRegistry::with_builtins();
            let types: Vec<_> = registry.types().collect();
            assert_eq!(types, vec!["github", "none", "pivotal"]);
        }

        #[test]
        fn lookup_is_case_sensitive() {
            let registry = TrackerRegistry::with_builtins();
            assert!(registry.lookup("github").is_some());
            assert!(registry.lookup("GitHub").is_none());
        }
    }

    mod instantiate {
        use super::*;

        #[test]
        fn passes_options_to_factory() {
            let registry = TrackerRegistry::with_builtins();
            let config = IssueTrackerConfig::new("github")
                .with_option("api_token", "t")
                .with_option("repo", "foo/bar");

            let tracker = registry.instantiate(&config).unwrap();
            assert!(tracker.configured());
        }

        #[test]
        fn unknown_type_is_none() {
            let registry = TrackerRegistry::with_builtins();
            assert!(registry
                .instantiate(&IssueTrackerConfig::new("bugzilla"))
                .is_none());
        }

        #[test]
        fn empty_registry_knows_nothing() {
            let registry = TrackerRegistry::new();
            assert!(!registry.contains("github"));
            assert!(registry
                .instantiate(&IssueTrackerConfig::new("github"))
                .is_none());
        }
    }

    mod active_tracker {
        use super::*;

        #[test]
        fn absent_config() {
            let registry = TrackerRegistry::with_builtins();
            assert!(registry.active_tracker(None).is_none());
        }

        #[test]
        fn registered_but_unconfigured() {
            let registry =
                TrackerRegistry::new().with("pivotal", MockTracker::unconfigured("pivotal").factory());
            assert!(registry
                .active_tracker(Some(&IssueTrackerConfig::new("pivotal")))
                .is_none());
        }

        #[test]
        fn registered_and_configured() {
            let registry =
                TrackerRegistry::new().with("pivotal", MockTracker::configured("pivotal").factory());
            let tracker = registry
                .active_tracker(Some(&IssueTrackerConfig::new("pivotal")))
                .unwrap();
            assert_eq!(tracker.label(), "pivotal");
        }

        #[test]
        fn none_type_never_active() {
            let registry = TrackerRegistry::with_builtins();
            assert!(registry
                .active_tracker(Some(&IssueTrackerConfig::new("none")))
                .is_none());
        }
    }

    #[test]
    fn register_replaces() {
        let mut registry = TrackerRegistry::new();
        registry.register("x", MockTracker::unconfigured("first").factory());
        registry.register("x", MockTracker::configured("second").factory());

        let tracker = registry.instantiate(&IssueTrackerConfig::new("x")).unwrap();
        assert_eq!(tracker.label(), "second");
        assert_eq!(registry.types().count(), 1);
    }

    #[test]
    fn debug_lists_types() {
        let registry = TrackerRegistry::with_builtins();
        let debug = format!("{:?}", registry);
        assert!(debug.contains("pivotal"));
    }
}
