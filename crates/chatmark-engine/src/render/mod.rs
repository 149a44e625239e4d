//! # Rendering
//!
//! Single-pass, line-oriented Markdown-subset to HTML conversion.
//!
//! ## Pass Structure
//!
//! 1. **Line buffer** (`lines`): the input split on `\n` into slots that
//!    multi-line constructs mark consumed
//! 2. **Classification** (`classify`): each visited line becomes a `LineClass`
//!    from its own leading characters
//! 3. **Emission** (`builder`): `HtmlBuilder` turns each class into one
//!    fragment, resolving fence lookahead and list boundaries against the buffer
//!
//! ## Modules
//!
//! - **`kinds`**: per-construct delimiters and HTML shapes
//! - **`inline`**: the ordered inline substitution pipeline
//!
//! ## Key Invariants
//!
//! - Rendering is total: every `&str` produces a `String`, nothing panics
//! - Output is trusted HTML; input text is never escaped here (see [`crate::sanitize`])
//! - List boundaries look only at the immediately adjacent lines

mod builder;
pub mod classify;
pub mod inline;
pub mod kinds;
mod lines;

#[cfg(test)]
mod tests;

use builder::HtmlBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use inline::{INLINE_PIPELINE, InlineStage, apply_inline};
use lines::LineBuffer;

use crate::sanitize::{AllowList, Passthrough, SanitizeMode, Sanitizer};

/// Renders Markdown-subset `text` to an HTML string.
///
/// The result is unescaped and meant to be injected as trusted markup.
pub fn render(text: &str) -> String {
    let mut buffer = LineBuffer::new(text);
    let mut builder = HtmlBuilder::new();

    for index in 0..buffer.len() {
        builder.push(&mut buffer, index);
    }

    builder.finish()
}

/// [`render`] followed by a sanitizing stage.
pub struct Renderer {
    sanitizer: Box<dyn Sanitizer>,
}

impl Renderer {
    /// No sanitizing: output is byte-identical to [`render`].
    pub fn trusted() -> Self {
        Self::with_sanitizer(Passthrough)
    }

    /// Output restricted to the tags and attributes the renderer emits.
    pub fn sanitized() -> Self {
        Self::with_sanitizer(AllowList)
    }

    pub fn with_sanitizer<S: Sanitizer + 'static>(sanitizer: S) -> Self {
        Self {
            sanitizer: Box::new(sanitizer),
        }
    }

    pub fn for_mode(mode: SanitizeMode) -> Self {
        match mode {
            SanitizeMode::Trusted => Self::trusted(),
            SanitizeMode::AllowList => Self::sanitized(),
        }
    }

    pub fn render(&self, text: &str) -> String {
        self.sanitizer.sanitize(render(text))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::trusted()
    }
}
