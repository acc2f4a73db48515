use pretty_assertions::assert_eq;
use sitegen_engine::{
    BlockType, HtmlNode, InlineError, RenderError, markdown_to_html_node,
    parsing::parse_document, render_page,
};

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = markdown_to_html_node(&md).unwrap().to_html().unwrap();
    assert_eq!(html, expected.trim_end());
}

/// The wrapping div has one child per block, in document order
#[test]
fn one_child_per_block() {
    let md = "# H\n\npara\n\n```\ncode\n```\n\n> q\n\n- u\n\n1. o";
    let node = markdown_to_html_node(md).unwrap();

    let tags: Vec<_> = node.children().iter().map(HtmlNode::tag).collect();
    assert_eq!(
        tags,
        vec![
            Some("h1"),
            Some("p"),
            Some("pre"),
            Some("blockquote"),
            Some("ul"),
            Some("ol")
        ]
    );
}

#[test]
fn classification_matches_assembly() {
    let kinds: Vec<_> = parse_document("1. a\n2. b\n\n2. a\n3. b\n\n> a\nb")
        .into_iter()
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BlockType::OrderedList,
            BlockType::Paragraph,
            BlockType::Paragraph
        ]
    );
}

/// One malformed block fails the whole document
#[test]
fn malformed_block_fails_document() {
    let md = "# Fine\n\nAlso fine\n\nnot _fine";
    assert_eq!(
        markdown_to_html_node(md),
        Err(RenderError::Inline(InlineError::UnmatchedDelimiter {
            delimiter: "_".into(),
            text: "not _fine".into(),
        }))
    );
}

#[test]
fn render_page_from_fixture() {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/mixed_blocks.md")).unwrap();
    let template = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    let page = render_page(template, &md, "/fans/").unwrap();

    assert!(page.starts_with("<title>Tolkien Fan Club</title><main><div><h1>"));
    assert!(page.contains(r#"<img src="/fans/images/tolkien.png""#));
    assert!(page.contains(r#"<a href="/fans/contact">"#));
    assert!(page.ends_with("</div></main>"));
}
