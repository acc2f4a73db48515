//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed,
//!    non-empty block strings
//!
//! 2. **Classification** (`classify`): each block string gets a `BlockType` from
//!    first-match-wins rules over its whole text and its lines
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//!
//! ## Key Invariants
//!
//! - Lists and quotes do not nest
//! - Ordered lists number from 1 in steps of 1, anything else is a paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::block_to_block_type;
pub use split::markdown_to_blocks;
pub use types::{Block, BlockType};
