use super::{
    classify::{LineClass, MarkdownLineClassifier},
    inline::apply_inline,
    kinds::{BlockQuote, CodeFence, Heading, ListBoundary, ListItem, Paragraph, ThematicBreak},
    lines::LineBuffer,
};

/// Walks a [`LineBuffer`] once, emitting at most one HTML fragment per line.
pub struct HtmlBuilder {
    classifier: MarkdownLineClassifier,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            out: vec![],
        }
    }

    /// Visits the line at `index`. Fences consume the lines they fold in.
    pub fn push(&mut self, buffer: &mut LineBuffer<'_>, index: usize) {
        let line = buffer.get(index);
        let class = self.classifier.classify(line);
        log::trace!("line {index}: {class:?}");

        let fragment = match class {
            LineClass::Blank => return,
            LineClass::FenceOpen { info } => Self::fence(buffer, index, info),
            LineClass::Heading { level, text } => Heading::html(level, text),
            LineClass::ListItem { kind, line } => {
                let boundary = ListBoundary::between(buffer.prev(index), buffer.next(index));
                let substituted = apply_inline(line);
                ListItem::html(kind, boundary, ListItem::strip_marker(&substituted))
            }
            LineClass::BlockQuote { content } => BlockQuote::html(&apply_inline(content)),
            LineClass::ThematicBreak => ThematicBreak::HTML.to_string(),
            LineClass::Paragraph { text } => Paragraph::html(&apply_inline(text)),
        };
        self.out.push(fragment);
    }

    /// Concatenates the fragments in line order with no separator.
    pub fn finish(self) -> String {
        self.out.concat()
    }

    fn fence(buffer: &mut LineBuffer<'_>, index: usize, info: &str) -> String {
        let body_start = index + 1;
        let Some(close) = buffer.position_from(body_start, CodeFence::is_fence) else {
            // Lines scanned by the failed lookahead are dropped, not re-rendered.
            log::debug!("unterminated code fence at line {}", index + 1);
            buffer.consume_range(body_start..buffer.len());
            return CodeFence::unterminated_html(info);
        };

        let mut body = String::new();
        for i in body_start..close {
            body.push_str(buffer.get(i));
            body.push('\n');
        }
        buffer.consume_range(body_start..close + 1);
        CodeFence::html(info, &body)
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
