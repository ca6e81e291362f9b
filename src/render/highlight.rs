//! Transcript sanitization and numeric highlighting.
//!
//! The transform is escape-then-markup, in that order: escaping after the
//! highlight spans were inserted would mangle them, and escaping an already
//! escaped transcript double-escapes it. Callers apply it exactly once per
//! full transcript, never incrementally per fragment.

use regex::Regex;
use std::sync::OnceLock;

/// Numeric token: integer or decimal, optionally followed by `%`
const NUMBER_PATTERN: &str = r"(\d+\.?\d*\s*%?)";

const HIGHLIGHT_OPEN: &str = r#"<span class="number-highlight">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

fn number_regex() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

/// Escape a transcript and wrap every numeric token in a highlight span.
///
/// Line breaks become explicit `<br>` markers so the renderer preserves the
/// analyzer's paragraph structure.
pub fn highlight_numbers(text: &str) -> String {
    let escaped = escape_html(text);
    let with_breaks = escaped.replace('\n', "<br>");

    number_regex()
        .replace_all(&with_breaks, format!("{}$1{}", HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE))
        .into_owned()
}

/// Escape markup-significant characters.
///
/// Only `&`, `<` and `>` are escaped: quote entities carry digits
/// (`&#39;`) and would collide with the number pattern applied afterwards.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Strip highlight markup back to plain text, for exports.
///
/// Entity order matters on the way back out: `&lt;`/`&gt;` before `&amp;`,
/// the reverse of escaping.
pub fn strip_markup(html: &str) -> String {
    html.replace(HIGHLIGHT_OPEN, "")
        .replace(HIGHLIGHT_CLOSE, "")
        .replace("<br>", "\n")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
