//! # Inline Parsing
//!
//! Turns a run of inline text into typed [`TextNode`]s.
//!
//! ## Pipeline
//!
//! The tokenizer starts from a single plain node and refines it in a fixed order:
//! code, bold, italic (delimiter splitting), then images, then links (markup
//! extraction). Each stage only touches nodes that are still plain, so styling
//! never nests.
//!
//! ## Modules
//!
//! - **`types`**: `TextNode` and the closed `TextKind` enum
//! - **`kinds`**: delimiter constants (`Style`, `Markup`)
//! - **`cursor`**: byte cursor used by the markup scanner
//! - **`delimiter`**: `split_nodes_delimiter`
//! - **`extract`**: `scan_images`, `scan_links`, `extract_markdown_images`, `extract_markdown_links`
//! - **`parser`**: `text_to_text_nodes`, `split_nodes_image`, `split_nodes_link`

pub mod cursor;
pub mod delimiter;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use delimiter::split_nodes_delimiter;
pub use extract::{extract_markdown_images, extract_markdown_links};
pub use kinds::Style;
pub use parser::{split_nodes_image, split_nodes_link, text_to_text_nodes};
pub use types::{TextKind, TextNode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },
}
