//! Assistant text to display markup.
//!
//! Pure string transformation, no session state: line breaks become `<br>`
//! and markdown-style links of the exact form `[label](http(s)://url)`
//! become anchors. Everything else passes through verbatim. The content is
//! trusted as-is; no HTML escaping is performed (the reply originates from
//! an operator-configured endpoint).

use regex::Regex;
use std::sync::LazyLock;

/// Inline link markup: `[label](url)` where the URL is http or https and
/// contains no whitespace or closing parenthesis.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").expect("link pattern is valid")
});

/// Convert assistant reply text into display markup.
pub fn render_markup(content: &str) -> String {
    let with_breaks = content.replace('\n', "<br>");
    LINK_RE
        .replace_all(
            &with_breaks,
            r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
        )
        .into_owned()
}
