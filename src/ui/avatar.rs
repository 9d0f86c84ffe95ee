//! ui::avatar
//!
//! Avatar URLs for comment authors.

use sha2::{Digest, Sha256};

use crate::core::config::Config;
use crate::core::types::{present, CommentAuthor};

/// Base URL for gravatar images.
pub const GRAVATAR_BASE: &str = "http://www.gravatar.com/avatar";

/// Gravatar hash of an email: SHA-256 hex of the trimmed, lowercased address.
pub fn gravatar_hash(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}

/// Avatar URL for `author`, or `None` when gravatar is off or the author
/// has no email.
///
/// # Example
///
/// ```
/// use errview::core::config::Config;
/// use errview::core::types::CommentAuthor;
/// use errview::ui::avatar::avatar_url;
///
/// let author = CommentAuthor {
///     name: "Ada".into(),
///     email: Some("ada@example.com".into()),
/// };
/// let url = avatar_url(&author, &Config::default()).unwrap();
/// assert!(url.starts_with("http://www.gravatar.com/avatar/"));
/// assert!(url.ends_with("?d=identicon"));
/// ```
pub fn avatar_url(author: &CommentAuthor, config: &Config) -> Option<String> {
    if !config.use_gravatar() {
        return None;
    }
    let email = present(author.email.as_deref())?;
    Some(format!(
        "{}/{}?d={}",
        GRAVATAR_BASE,
        gravatar_hash(email),
        config.gravatar_default()
    ))
}
