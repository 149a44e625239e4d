pub mod render;
pub mod sanitize;
pub mod transcript;

// Re-export key types for easier usage
pub use render::{Renderer, render};
pub use sanitize::{AllowList, Passthrough, SanitizeMode, Sanitizer};
pub use transcript::{
    ChatMessage, Role, Transcript, TranscriptError, render_answer, render_message,
    render_transcript,
};
