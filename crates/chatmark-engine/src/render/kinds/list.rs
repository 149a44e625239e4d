use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s").expect("Invalid unordered list regex"));
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s").expect("Invalid ordered list regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Where an item sits relative to its immediate neighbours.
///
/// Only the lines directly above and below are inspected. There is no
/// "inside a list" state, so a blank line between items ends one list and
/// starts another, and a single-item list is left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBoundary {
    /// Previous line is not an item: emit the opening tag.
    Open,
    /// Both neighbours are items.
    Continue,
    /// Previous line is an item, next is not: emit the closing tag.
    Close,
}

impl ListBoundary {
    pub fn between(prev: Option<&str>, next: Option<&str>) -> Self {
        let prev_is_item = prev.is_some_and(ListItem::is_item);
        let next_is_item = next.is_some_and(ListItem::is_item);
        match (prev_is_item, next_is_item) {
            (false, _) => ListBoundary::Open,
            (true, false) => ListBoundary::Close,
            (true, true) => ListBoundary::Continue,
        }
    }
}

pub struct ListItem;

impl ListItem {
    /// Returns the list kind when `line` starts with an item marker.
    pub fn kind(line: &str) -> Option<ListKind> {
        if UNORDERED_MARKER.is_match(line) {
            Some(ListKind::Unordered)
        } else if ORDERED_MARKER.is_match(line) {
            Some(ListKind::Ordered)
        } else {
            None
        }
    }

    /// Strips the leading marker from an already inline-substituted line.
    ///
    /// Substitution can consume a `* ` marker into an `<em>` tag, in which case
    /// no marker remains and the text is returned unchanged.
    pub fn strip_marker(text: &str) -> &str {
        UNORDERED_MARKER
            .find(text)
            .or_else(|| ORDERED_MARKER.find(text))
            .map_or(text, |m| &text[m.end()..])
    }

    pub fn is_item(line: &str) -> bool {
        UNORDERED_MARKER.is_match(line) || ORDERED_MARKER.is_match(line)
    }

    /// HTML for one item. `content` has already been through inline substitution.
    pub fn html(kind: ListKind, boundary: ListBoundary, content: &str) -> String {
        let tag = kind.tag();
        match boundary {
            ListBoundary::Open => format!("<{tag}><li>{content}</li>"),
            ListBoundary::Continue => format!("<li>{content}</li>"),
            ListBoundary::Close => format!("<li>{content}</li></{tag}>"),
        }
    }
}
