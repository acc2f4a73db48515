use super::{
    InlineError,
    delimiter::split_nodes_delimiter,
    extract::{scan_images, scan_links},
    kinds::Style,
    types::TextNode,
};

/// Tokenizes a run of inline text into [`TextNode`]s.
///
/// # Precedence
/// Code spans are resolved first, then bold, then italic. Images and
/// links are carved out of whatever plain text remains, images before
/// links so that `![..](..)` never reads as a link.
///
/// # Errors
/// [`InlineError::UnmatchedDelimiter`] if any style delimiter is left open.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>, InlineError> {
    let mut nodes = vec![TextNode::plain(text)];
    for style in Style::PIPELINE {
        nodes = split_nodes_delimiter(nodes, style.delimiter(), style)?;
    }
    let nodes = split_nodes_image(nodes);
    Ok(split_nodes_link(nodes))
}

/// Splits `![alt](src)` markup out of plain nodes into image nodes.
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_markup(nodes, true)
}

/// Splits `[label](href)` markup out of plain nodes into link nodes.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_markup(nodes, false)
}

fn split_nodes_markup(nodes: Vec<TextNode>, images: bool) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }
        match split_markup_text(&node.text, images) {
            Some(parts) => out.extend(parts),
            None => out.push(node),
        }
    }
    out
}

/// Cuts `text` at each image (or link) span; `None` if there are none.
fn split_markup_text(text: &str, images: bool) -> Option<Vec<TextNode>> {
    let matches = if images {
        scan_images(text)
    } else {
        scan_links(text)
    };
    if matches.is_empty() {
        return None;
    }

    let mut out = vec![];
    let mut text_start = 0;
    for m in matches {
        flush_text(&mut out, &text[text_start..m.start]);
        if images {
            out.push(TextNode::image(m.label, m.dest));
        } else {
            out.push(TextNode::link(m.label, m.dest));
        }
        text_start = m.end;
    }
    flush_text(&mut out, &text[text_start..]);
    Some(out)
}

fn flush_text(out: &mut Vec<TextNode>, text: &str) {
    if !text.is_empty() {
        out.push(TextNode::plain(text));
    }
}
