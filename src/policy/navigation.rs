//! policy::navigation
//!
//! Target of the "up" link on the detail page.
//!
//! The referer is passed through untouched. Callers that do not trust it
//! must sanitize it before handing it over.

/// Returns the referer when present and non-empty, otherwise `fallback`.
///
/// # Example
///
/// ```
/// use errview::policy::resolve_up_link;
///
/// assert_eq!(
///     resolve_up_link(Some("http://localhost:3000/problems"), "/apps/a1/problems"),
///     "http://localhost:3000/problems"
/// );
/// assert_eq!(resolve_up_link(None, "/apps/a1/problems"), "/apps/a1/problems");
/// assert_eq!(resolve_up_link(Some(""), "/apps/a1/problems"), "/apps/a1/problems");
/// ```
pub fn resolve_up_link(referer: Option<&str>, fallback: &str) -> String {
    match referer {
        Some(referer) if !referer.is_empty() => referer.to_string(),
        _ => fallback.to_string(),
    }
}
