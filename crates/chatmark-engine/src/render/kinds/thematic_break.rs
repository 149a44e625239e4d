pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['*', '-', '_'];
    pub const MIN_LEN: usize = 3;
    pub const HTML: &'static str = "<hr />";

    /// Three or more of one marker character, nothing else once trimmed.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && t.chars().count() >= Self::MIN_LEN
            && chars.all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("  ------  ", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- - -", false)]
    #[case("===", false)]
    #[case("", false)]
    fn detects_rule(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
