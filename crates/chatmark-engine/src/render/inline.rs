//! # Inline Substitution
//!
//! A fixed pipeline of regex replacements applied to one line of text.
//!
//! ## Stage Order
//!
//! [`INLINE_PIPELINE`] runs strong, emphasis, code, then link. Each stage is a
//! global, non-recursive replace over the output of the previous stage.
//! Strong must precede emphasis: the single-delimiter emphasis pattern would
//! otherwise match the inner pair of `**x**` and leave stray asterisks.
//!
//! Nothing is escaped. Code spans are not raw zones, so `` `*x*` `` becomes
//! `<code><em>x</em></code>`, and underscores inside link targets are
//! rewritten by the emphasis stage before the link stage sees them.

use std::sync::LazyLock;

use regex::Regex;

/// One substitution stage of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStage {
    /// `**x**` and `__x__`.
    Strong,
    /// `*x*` and `_x_`, non-greedy.
    Emphasis,
    /// `` `x` ``.
    Code,
    /// `[label](url)`.
    Link,
}

/// The stages in the order they run.
pub const INLINE_PIPELINE: [InlineStage; 4] = [
    InlineStage::Strong,
    InlineStage::Emphasis,
    InlineStage::Code,
    InlineStage::Link,
];

impl InlineStage {
    /// `(pattern, replacement)` pairs, applied in order within the stage.
    pub fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            InlineStage::Strong => &[
                (r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
                (r"__(.*?)__", "<strong>${1}</strong>"),
            ],
            InlineStage::Emphasis => &[
                (r"\*(.*?)\*", "<em>${1}</em>"),
                (r"_(.*?)_", "<em>${1}</em>"),
            ],
            InlineStage::Code => &[(r"`(.*?)`", "<code>${1}</code>")],
            InlineStage::Link => &[(
                r"\[([^\]]+)\]\(([^)]+)\)",
                r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
            )],
        }
    }
}

struct CompiledRule {
    pattern: Regex,
    replacement: &'static str,
}

static COMPILED_PIPELINE: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    INLINE_PIPELINE
        .iter()
        .flat_map(|stage| stage.rules())
        .map(|&(pattern, replacement)| CompiledRule {
            pattern: Regex::new(pattern).expect("Invalid inline regex"),
            replacement,
        })
        .collect()
});

/// Runs every stage of [`INLINE_PIPELINE`] over `line`.
pub fn apply_inline(line: &str) -> String {
    COMPILED_PIPELINE
        .iter()
        .fold(line.to_string(), |acc, rule| {
            rule.pattern
                .replace_all(&acc, rule.replacement)
                .into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("**b**", "<strong>b</strong>")]
    #[case("__b__", "<strong>b</strong>")]
    #[case("*i*", "<em>i</em>")]
    #[case("_i_", "<em>i</em>")]
    #[case("`c`", "<code>c</code>")]
    #[case(
        "[t](http://x.io)",
        r#"<a href="http://x.io" target="_blank" rel="noopener noreferrer">t</a>"#
    )]
    #[case("**a** *b* **c**", "<strong>a</strong> <em>b</em> <strong>c</strong>")]
    #[case("***both***", "<strong><em>both</strong></em>")]
    fn substitutes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_inline(input), expected);
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(apply_inline("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(apply_inline("`open"), "`open");
    }

    #[test]
    fn code_span_is_not_a_raw_zone() {
        assert_eq!(apply_inline("`*x*`"), "<code><em>x</em></code>");
    }

    #[test]
    fn snake_case_is_emphasised() {
        assert_eq!(apply_inline("a_b_c"), "a<em>b</em>c");
    }

    #[test]
    fn html_passes_through() {
        assert_eq!(apply_inline("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn pipeline_order_is_fixed() {
        assert_eq!(
            INLINE_PIPELINE,
            [
                InlineStage::Strong,
                InlineStage::Emphasis,
                InlineStage::Code,
                InlineStage::Link
            ]
        );
    }
}
