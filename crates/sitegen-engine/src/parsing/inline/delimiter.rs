use super::{InlineError, kinds::Style, types::TextNode};

/// Splits every plain node on `delimiter`, styling the odd-numbered pieces.
///
/// Nodes that are already styled pass through untouched, as do plain
/// nodes that don't contain the delimiter. Empty pieces (adjacent
/// delimiters, or a delimiter at either end) are dropped.
///
/// # Errors
/// [`InlineError::UnmatchedDelimiter`] if a plain node holds an odd
/// number of delimiters.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    style: Style,
) -> Result<Vec<TextNode>, InlineError> {
    if delimiter.is_empty() {
        return Ok(nodes);
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() || !node.text.contains(delimiter) {
            out.push(node);
            continue;
        }

        // n delimiters give n + 1 pieces, which must be odd
        if node.text.matches(delimiter).count() % 2 == 1 {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: node.text,
            });
        }

        for (i, part) in node.text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextNode::plain(part));
            } else {
                out.push(TextNode::new(part, style.into()));
            }
        }
    }
    Ok(out)
}
