//! # Call Sites
//!
//! The two places rendered Markdown is shown: messages in a chat transcript
//! and a single-shot answer view. Both go through the same [`Renderer`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::Renderer;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Failed to parse transcript JSON: {source}")]
    Parse { source: serde_json::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// An ordered list of chat messages, serialised as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        serde_json::from_str(json).map_err(|source| TranscriptError::Parse { source })
    }
}

/// Renders one message wrapped in a role-classed `div`.
///
/// User text is shown as typed, escaped into a single paragraph; assistant
/// and system text is rendered as Markdown.
pub fn render_message(renderer: &Renderer, message: &ChatMessage) -> String {
    let body = match message.role {
        Role::User if message.content.trim().is_empty() => String::new(),
        Role::User => format!("<p>{}</p>", html_escape::encode_text(&message.content)),
        Role::Assistant | Role::System => renderer.render(&message.content),
    };
    format!(
        "<div class=\"message message-{}\">{body}</div>",
        message.role.as_str()
    )
}

pub fn render_transcript(renderer: &Renderer, transcript: &Transcript) -> String {
    log::debug!("rendering {} messages", transcript.messages.len());
    transcript
        .messages
        .iter()
        .map(|m| render_message(renderer, m))
        .collect()
}

/// Renders a single answer. Blank answers render as nothing at all.
pub fn render_answer(renderer: &Renderer, answer: &str) -> String {
    if answer.trim().is_empty() {
        return String::new();
    }
    format!("<div class=\"answer\">{}</div>", renderer.render(answer))
}
