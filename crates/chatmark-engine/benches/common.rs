// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_answer(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote with a [link](https://example.com)\n\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_transcript_json(messages: usize) -> String {
    let mut json = String::from("[");
    for i in 0..messages {
        if i > 0 {
            json.push(',');
        }
        let (role, content) = if i % 2 == 0 {
            ("user", format!("Question {i}?"))
        } else {
            ("assistant", "Here you go:\\n\\n- one\\n- two\\n\\n```sh\\nls\\n```".to_string())
        };
        json.push_str(&format!(r#"{{"role":"{role}","content":"{content}"}}"#));
    }
    json.push(']');
    json
}
