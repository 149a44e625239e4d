use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ListKind, ThematicBreak};

/// Classification of a single line from its own leading characters.
///
/// List boundaries are not decided here; they need the neighbouring lines
/// and are resolved by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty, consumed, or whitespace-only.
    Blank,
    /// Opening fence with the text after the backticks.
    FenceOpen { info: &'a str },
    Heading { level: u8, text: &'a str },
    /// The whole raw line; the marker is stripped after inline substitution.
    ListItem { kind: ListKind, line: &'a str },
    BlockQuote { content: &'a str },
    ThematicBreak,
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the render pass.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Precedence: fence, blank, heading, list item, blockquote, rule, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(info) = CodeFence::info(line) {
            return LineClass::FenceOpen { info };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(kind) = ListItem::kind(line) {
            return LineClass::ListItem { kind, line };
        }
        if let Some(content) = BlockQuote::strip_prefix(line) {
            return LineClass::BlockQuote { content };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        LineClass::Paragraph { text: line }
    }
}
