//! Whole-document substitution passes.
//!
//! These run over the full text rather than line by line, so an emphasis span
//! is free to sit anywhere on a line, including inside a heading or a list item.
//! `.` never crosses a line terminator, so no span reaches past its line.

use std::sync::OnceLock;

use regex::Regex;

/// Replace every `#`-prefixed heading line with `<hN>…</hN>`.
///
/// A line qualifies when it starts with exactly N `#` (1 to 6), one space, and
/// at least one more character. Levels are applied from 6 down to 1; since each
/// pattern is anchored to the whole line and the replacement no longer starts
/// with `#`, a line is rewritten at most once.
pub fn headings(text: &str) -> String {
    let mut html = text.to_string();
    for (index, pattern) in heading_patterns().iter().enumerate().rev() {
        let level = index + 1;
        html = pattern
            .replace_all(&html, format!("<h{level}>${{1}}</h{level}>"))
            .into_owned();
    }
    html
}

/// `**text**` to `<strong>text</strong>`, shortest match first.
pub fn bold(text: &str) -> String {
    bold_pattern()
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// `*text*` to `<em>text</em>`, shortest match first.
///
/// Must run after [`bold`]; applied to `**x**` directly it yields `<em>*x</em>*`.
pub fn italic(text: &str) -> String {
    italic_pattern()
        .replace_all(text, "<em>${1}</em>")
        .into_owned()
}

// `R` keeps `\r` out of both `.` and the `$` anchor, so CRLF input yields
// `<h1>Title</h1>\r\n` rather than `<h1>Title\r</h1>\n`.
fn heading_patterns() -> &'static [Regex; 6] {
    static RE: OnceLock<[Regex; 6]> = OnceLock::new();
    RE.get_or_init(|| {
        std::array::from_fn(|index| {
            let hashes = "#".repeat(index + 1);
            Regex::new(&format!(r"(?mR)^{hashes} (.+)$")).expect("Invalid heading regex")
        })
    })
}

fn bold_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?R)\*\*(.+?)\*\*").expect("Invalid bold regex"))
}

fn italic_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?R)\*(.+?)\*").expect("Invalid italic regex"))
}
