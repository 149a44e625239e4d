//! # Line Kinds
//!
//! One type per construct. Each owns its delimiters and the HTML shape it
//! emits; the classifier and builder never hardcode `` ``` `` or `> `.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{ListBoundary, ListItem, ListKind};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
