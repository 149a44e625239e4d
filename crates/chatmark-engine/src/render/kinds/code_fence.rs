/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognised. The opening line's trimmed content
/// must start with [`CodeFence::BACKTICKS`]; any line whose trimmed content
/// starts the same way closes it, whatever follows the backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the text after the backticks if `line` opens or closes a fence.
    pub fn info(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::BACKTICKS)
    }

    pub fn is_fence(line: &str) -> bool {
        Self::info(line).is_some()
    }

    /// HTML for a closed fence. `body` already carries one `\n` per line.
    pub fn html(info: &str, body: &str) -> String {
        let language = info.trim();
        if language.is_empty() {
            format!("<pre><code>{body}</code></pre>")
        } else {
            format!("<pre class=\"language-{language}\"><code>{body}</code></pre>")
        }
    }

    /// HTML for an opening fence with no matching close: only the text after
    /// the backticks on the opening line becomes code.
    pub fn unterminated_html(info: &str) -> String {
        format!("<pre><code>{info}</code></pre>")
    }
}
