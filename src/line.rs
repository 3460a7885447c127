use std::sync::OnceLock;

use regex::Regex;

/// Which kind of list a run of item lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// How a single line reads to the list pass. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `- item`, `* item` or `1. item`, optionally indented. `content` is the
    /// text after the marker and its following space.
    Item { kind: ListKind, content: &'a str },
    Plain,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = unordered_item().captures(line) {
            return LineKind::Item {
                kind: ListKind::Unordered,
                content: caps.get(1).map_or("", |m| m.as_str()),
            };
        }
        if let Some(caps) = ordered_item().captures(line) {
            return LineKind::Item {
                kind: ListKind::Ordered,
                content: caps.get(1).map_or("", |m| m.as_str()),
            };
        }
        LineKind::Plain
    }
}

/// Open-list context while scanning lines. At most one list is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Closed,
    Open(ListKind),
}

fn unordered_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[*-] (.+)$").expect("Invalid unordered item regex"))
}

fn ordered_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\. (.+)$").expect("Invalid ordered item regex"))
}
