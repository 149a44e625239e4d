//! Fixture tests for the render pass.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use crate::render::{LineBuffer, render};

#[test]
fn fixture_chat_answer() {
    assert_fixture("chat_answer");
}

#[test]
fn fixture_list_boundaries() {
    assert_fixture("list_boundaries");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

#[test]
fn fixture_raw_html_passthrough() {
    assert_fixture("raw_html_passthrough");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/render/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let html = render(&md);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

/// Every line that is not blank and not folded into a fence yields output.
#[test]
fn every_content_line_emits_a_fragment() {
    let md = "a\n\nb\n- c\n> d\n---\n# e";
    let html = render(md);
    for needle in [
        "<p>a</p>",
        "<p>b</p>",
        "<li>c</li>",
        "<blockquote>d</blockquote>",
        "<hr />",
        "<h1>e</h1>",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
}

#[test]
fn fence_body_appears_exactly_once() {
    let md = "```\nonly once\n```";
    let html = render(md);
    assert_eq!(html.matches("only once").count(), 1);
}

#[test]
fn render_does_not_mutate_caller_text() {
    let md = String::from("```\nx\n```");
    let before = md.clone();
    let _ = render(&md);
    assert_eq!(md, before);
    assert_eq!(LineBuffer::new(&md).get(1), "x");
}

#[test]
fn crlf_lines_keep_carriage_return() {
    // `\r` is not a line separator; trimming still classifies the line.
    assert_eq!(render("# T\r\n---\r"), "<h1>T\r</h1><hr />");
}
