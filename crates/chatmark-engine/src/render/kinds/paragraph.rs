/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default when no other
/// line kind matches. Each non-blank line is its own paragraph.
pub struct Paragraph;

impl Paragraph {
    pub fn html(content: &str) -> String {
        format!("<p>{content}</p>")
    }
}
