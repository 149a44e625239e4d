//! # Sanitizing
//!
//! Optional stage run on the final HTML string. [`crate::render`] never
//! escapes its input; callers that cannot trust the text source compose a
//! [`Sanitizer`] after it via [`crate::Renderer`].

use serde::{Deserialize, Serialize};

pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, html: String) -> String;
}

/// Returns the HTML unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Sanitizer for Passthrough {
    fn sanitize(&self, html: String) -> String {
        html
    }
}

/// Keeps only the elements and attributes the renderer itself produces.
///
/// Script and style elements are dropped along with their content. Link
/// targets are limited to [`AllowList::URL_SCHEMES`] and relative URLs, and
/// every link gets `rel="noopener noreferrer"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowList;

impl AllowList {
    pub const TAGS: &'static [&'static str] = &[
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "p",
        "ul",
        "ol",
        "li",
        "blockquote",
        "hr",
        "pre",
        "code",
        "strong",
        "em",
        "a",
    ];
    pub const URL_SCHEMES: &'static [&'static str] = &["http", "https", "mailto"];
    pub const LINK_REL: &'static str = "noopener noreferrer";
}

impl Sanitizer for AllowList {
    fn sanitize(&self, html: String) -> String {
        ammonia::Builder::empty()
            .add_tags(Self::TAGS)
            .add_tag_attributes("pre", &["class"])
            .add_tag_attributes("a", &["href", "target"])
            .add_url_schemes(Self::URL_SCHEMES)
            .add_clean_content_tags(&["script", "style"])
            .link_rel(Some(Self::LINK_REL))
            .clean(&html)
            .to_string()
    }
}

/// Which sanitizer a [`crate::Renderer`] is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizeMode {
    /// Raw renderer output, for text from a trusted source.
    #[default]
    Trusted,
    AllowList,
}
