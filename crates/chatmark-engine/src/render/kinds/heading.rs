/// ATX heading type with owned marker prefixes.
///
/// Heading text is emitted verbatim: inline substitution is not applied.
pub struct Heading;

impl Heading {
    /// Markers ordered longest first, so `### x` never matches as level 1.
    pub const PREFIXES: [(u8, &'static str); 6] = [
        (6, "###### "),
        (5, "##### "),
        (4, "#### "),
        (3, "### "),
        (2, "## "),
        (1, "# "),
    ];

    /// Returns `(level, text)` if `line` starts with a heading marker.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(level, prefix)| line.strip_prefix(prefix).map(|text| (*level, text)))
    }

    pub fn html(level: u8, text: &str) -> String {
        format!("<h{level}>{text}</h{level}>")
    }
}
