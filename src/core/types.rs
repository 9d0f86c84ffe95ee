//! core::types
//!
//! Domain types for the problem detail view.
//!
//! # Types
//!
//! - [`App`] - An application that reports errors
//! - [`Problem`] - A grouped error report belonging to one app
//! - [`Comment`] - A user comment on a problem
//! - [`User`] - The viewing user, optionally linked to GitHub
//! - [`GithubRepo`] - Validated `owner/name` repository reference
//! - [`IssueTrackerConfig`] - An app's configured tracker reference
//!
//! # Presence
//!
//! Optional string fields follow "present" semantics: a blank value
//! (empty or whitespace only) is treated the same as an absent one.
//!
//! # Examples
//!
//! ```
//! use errview::core::types::{GithubRepo, User};
//!
//! let repo = GithubRepo::new("errbit/errbit").unwrap();
//! assert_eq!(repo.owner(), "errbit");
//! assert_eq!(repo.url(), "https://github.com/errbit/errbit");
//!
//! assert!(GithubRepo::new("no-slash").is_err());
//!
//! // Only a login without a token is not a linked identity
//! let user = User {
//!     github_login: Some("octocat".into()),
//!     github_oauth_token: None,
//! };
//! assert!(user.github_identity().is_none());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid github repo: {0}")]
    InvalidGithubRepo(String),
}

/// Returns the trimmed value if it is present (non-blank).
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A validated GitHub repository reference in `owner/name` form.
///
/// # Example
///
/// ```
/// use errview::core::types::GithubRepo;
///
/// let repo = GithubRepo::new("test_user/test_repo").unwrap();
/// assert_eq!(repo.name(), "test_repo");
/// assert_eq!(repo.to_string(), "test_user/test_repo");
///
/// assert!(GithubRepo::new("").is_err());
/// assert!(GithubRepo::new("/repo").is_err());
/// assert!(GithubRepo::new("a/b/c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GithubRepo {
    owner: String,
    name: String,
}

impl GithubRepo {
    /// Parse and validate an `owner/name` reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidGithubRepo` if either half is empty,
    /// there is not exactly one `/`, or the value contains whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TypeError> {
        let value = value.as_ref();

        if value.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidGithubRepo(format!(
                "'{value}' cannot contain whitespace"
            )));
        }

        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(TypeError::InvalidGithubRepo(format!(
                "'{value}' must have the form owner/name"
            ))),
        }
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Web URL for the repository.
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for GithubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl TryFrom<String> for GithubRepo {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GithubRepo> for String {
    fn from(repo: GithubRepo) -> Self {
        repo.to_string()
    }
}

/// Free-form options handed to a tracker plugin when it is instantiated.
pub type TrackerOptions = BTreeMap<String, String>;

/// An app's issue tracker reference: the plugin type tag plus its options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueTrackerConfig {
    /// Registry key of the tracker plugin (e.g. "pivotal")
    pub type_tracker: String,

    /// Plugin-specific options (tokens, project ids, ...)
    #[serde(default)]
    pub options: TrackerOptions,
}

impl IssueTrackerConfig {
    /// Create a tracker reference with no options.
    pub fn new(type_tracker: impl Into<String>) -> Self {
        Self {
            type_tracker: type_tracker.into(),
            options: TrackerOptions::new(),
        }
    }

    /// Add an option (builder style).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// An application reporting errors.
///
/// An app has at most one active issue tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct App {
    /// Route identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Linked GitHub repository, if any. A blank value means unlinked.
    #[serde(default, deserialize_with = "blank_repo_as_none")]
    pub github_repo: Option<GithubRepo>,

    /// Configured tracker plugin, if any
    #[serde(default)]
    pub issue_tracker: Option<IssueTrackerConfig>,
}

fn blank_repo_as_none<'de, D>(deserializer: D) -> Result<Option<GithubRepo>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match present(raw.as_deref()) {
        Some(value) => GithubRepo::new(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl App {
    /// Create an app with no integrations.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Author details attached to a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentAuthor {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A comment on a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comment {
    pub author: CommentAuthor,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A grouped error report.
///
/// Comments are kept in the order they were created; nothing in this
/// crate re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    /// Route identifier
    pub id: String,

    /// URL of an external issue already filed for this problem
    #[serde(default)]
    pub issue_link: Option<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Problem {
    /// Create a problem with no issue link and no comments.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// The issue link, if present (non-blank).
    pub fn issue_link(&self) -> Option<&str> {
        present(self.issue_link.as_deref())
    }
}

/// A linked GitHub identity: login and OAuth token, both present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GithubIdentity<'a> {
    pub login: &'a str,
    pub oauth_token: &'a str,
}

/// The user viewing the page.
///
/// `User::default()` is a user with no linked accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    #[serde(default)]
    pub github_login: Option<String>,
    #[serde(default)]
    pub github_oauth_token: Option<String>,
}

impl User {
    /// The linked GitHub identity.
    ///
    /// Returns `None` unless both the login and the token are present.
    pub fn github_identity(&self) -> Option<GithubIdentity<'_>> {
        let login = present(self.github_login.as_deref())?;
        let oauth_token = present(self.github_oauth_token.as_deref())?;
        Some(GithubIdentity { login, oauth_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod github_repo {
        use super::*;

        #[test]
        fn valid() {
            let repo = GithubRepo::new("foo/bar").unwrap();
            assert_eq!(repo.owner(), "foo");
            assert_eq!(repo.name(), "bar");
            assert_eq!(repo.url(), "https://github.com/foo/bar");
        }

        #[test]
        fn rejects_missing_halves() {
            assert!(GithubRepo::new("foo/").is_err());
            assert!(GithubRepo::new("/bar").is_err());
            assert!(GithubRepo::new("/").is_err());
            assert!(GithubRepo::new("foobar").is_err());
        }

        #[test]
        fn rejects_extra_segments() {
            assert!(matches!(
                GithubRepo::new("a/b/c"),
                Err(TypeError::InvalidGithubRepo(_))
            ));
        }

        #[test]
        fn rejects_whitespace() {
            assert!(GithubRepo::new("foo /bar").is_err());
            assert!(GithubRepo::new("foo/bar\n").is_err());
        }

        #[test]
        fn serde_as_string() {
            let repo = GithubRepo::new("foo/bar").unwrap();
            let json = serde_json::to_string(&repo).unwrap();
            assert_eq!(json, "\"foo/bar\"");

            let parsed: GithubRepo = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, repo);
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<GithubRepo, _> = serde_json::from_str("\"nope\"");
            assert!(result.is_err());
        }
    }

    mod problem {
        use super::*;

        #[test]
        fn issue_link_absent() {
            assert_eq!(Problem::new("p1").issue_link(), None);
        }

        #[test]
        fn issue_link_blank_is_absent() {
            let problem = Problem {
                issue_link: Some("   ".to_string()),
                ..Problem::new("p1")
            };
            assert_eq!(problem.issue_link(), None);
        }

        #[test]
        fn issue_link_present() {
            let problem = Problem {
                issue_link: Some("http://foo".to_string()),
                ..Problem::new("p1")
            };
            assert_eq!(problem.issue_link(), Some("http://foo"));
        }
    }

    mod user {
        use super::*;

        fn user(login: Option<&str>, token: Option<&str>) -> User {
            User {
                github_login: login.map(String::from),
                github_oauth_token: token.map(String::from),
            }
        }

        #[test]
        fn default_has_no_identity() {
            assert!(User::default().github_identity().is_none());
        }

        #[test]
        fn both_present() {
            let u = user(Some("test_user"), Some("abcdef"));
            let identity = u.github_identity().unwrap();
            assert_eq!(identity.login, "test_user");
            assert_eq!(identity.oauth_token, "abcdef");
        }

        #[test]
        fn one_missing_is_absent() {
            assert!(user(Some("test_user"), None).github_identity().is_none());
            assert!(user(None, Some("abcdef")).github_identity().is_none());
        }

        #[test]
        fn blank_is_absent() {
            assert!(user(Some(""), Some("abcdef")).github_identity().is_none());
            assert!(user(Some("test_user"), Some("  ")).github_identity().is_none());
        }
    }

    mod issue_tracker_config {
        use super::*;

        #[test]
        fn builder() {
            let config = IssueTrackerConfig::new("pivotal")
                .with_option("api_token", "token")
                .with_option("project_id", "1234");
            assert_eq!(config.type_tracker, "pivotal");
            assert_eq!(config.options.get("project_id").map(String::as_str), Some("1234"));
        }

        #[test]
        fn options_default_to_empty() {
            let config: IssueTrackerConfig = toml::from_str("type_tracker = \"github\"").unwrap();
            assert!(config.options.is_empty());
        }
    }
}
