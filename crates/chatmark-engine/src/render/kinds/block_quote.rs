/// Blockquote block type with owned prefix constant.
///
/// Only a single `> ` prefix at the very start of the line is recognised;
/// nested quotes render as a quote whose text starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Returns the text after the prefix if `line` is a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }

    pub fn html(content: &str) -> String {
        format!("<blockquote>{content}</blockquote>")
    }
}
