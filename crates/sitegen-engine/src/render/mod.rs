//! # Rendering
//!
//! Assembles classified blocks into an [`HtmlNode`] tree.
//!
//! Every block becomes one child of a wrapping `div`. Inline content is
//! tokenized with [`text_to_text_nodes`] and each [`TextNode`] maps to a
//! single leaf. Errors propagate: one malformed block fails the document.

pub mod page;

use crate::{
    html::{Attributes, HtmlError, HtmlNode, LeafNode},
    parsing::{
        blocks::{
            Block, BlockType,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
        inline::{InlineError, TextKind, TextNode, text_to_text_nodes},
        parse_document,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error("Block is not a valid {kind:?} block: {text}")]
    MalformedBlock { kind: BlockType, text: String },
    #[error("No h1 title found in document")]
    MissingTitle,
}

/// Renders a whole document into a wrapping `div`.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, RenderError> {
    let children = parse_document(document)
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Renders a document straight to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, RenderError> {
    Ok(markdown_to_html_node(document)?.to_html()?)
}

/// Converts one classified block into its HTML subtree.
pub fn block_to_html_node(block: &Block) -> Result<HtmlNode, RenderError> {
    let text = block.text.as_str();
    let node = match block.kind {
        BlockType::Paragraph => {
            HtmlNode::parent("p", text_to_children(&Paragraph::fold_lines(text))?)
        }
        BlockType::Heading => {
            let (level, content) =
                Heading::split(text).ok_or_else(|| RenderError::MalformedBlock {
                    kind: block.kind,
                    text: block.text.clone(),
                })?;
            HtmlNode::parent(&format!("h{level}"), text_to_children(content)?)
        }
        BlockType::Code => {
            let code = HtmlNode::leaf(Some("code"), CodeFence::inner(text));
            HtmlNode::parent("pre", vec![code])
        }
        BlockType::Quote => {
            let joined = text
                .lines()
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join(" ");
            HtmlNode::parent("blockquote", text_to_children(&joined)?)
        }
        BlockType::UnorderedList => {
            let items = text
                .lines()
                .map(|line| list_item(UnorderedList::strip_marker(line).unwrap_or(line)))
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ul", items)
        }
        BlockType::OrderedList => {
            let items = text
                .lines()
                .enumerate()
                .map(|(i, line)| list_item(OrderedList::strip_marker(line, i + 1).unwrap_or(line)))
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ol", items)
        }
    };
    Ok(node)
}

/// Maps an inline node to its HTML leaf.
pub fn text_node_to_html_node(node: &TextNode) -> HtmlNode {
    let text = node.text.as_str();
    let leaf = match &node.kind {
        TextKind::Plain => LeafNode::text(text),
        TextKind::Bold => LeafNode::new(Some("b"), text),
        TextKind::Italic => LeafNode::new(Some("i"), text),
        TextKind::Code => LeafNode::new(Some("code"), text),
        TextKind::Link { url } => LeafNode::new(Some("a"), text)
            .with_attributes(Attributes::new().with("href", url.as_str())),
        TextKind::Image { url } => LeafNode::new(Some("img"), "")
            .with_attributes(Attributes::new().with("src", url.as_str()).with("alt", text)),
    };
    leaf.into()
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    Ok(text_to_text_nodes(text)?
        .iter()
        .map(text_node_to_html_node)
        .collect())
}

fn list_item(text: &str) -> Result<HtmlNode, RenderError> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}
