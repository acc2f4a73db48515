pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
pub use io::*;
pub use models::source_page::*;
pub use parsing::{
    blocks::{Block, BlockType},
    inline::{InlineError, Style, TextKind, TextNode},
};
pub use render::{RenderError, markdown_to_html_node, page::*};
