//! ui::html
//!
//! Minimal HTML helpers for the fragments this crate emits.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an anchor. Attribute values and text are escaped.
pub fn anchor(href: &str, class: &str, text: &str, data: &[(&str, &str)]) -> String {
    let mut attrs = format!(r#"href="{}" class="{}""#, escape(href), escape(class));
    for (name, value) in data {
        attrs.push_str(&format!(r#" data-{}="{}""#, name, escape(value)));
    }
    format!("<a {}>{}</a>", attrs, escape(text))
}
