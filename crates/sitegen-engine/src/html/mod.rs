//! # HTML Node Model
//!
//! A small closed tree of tagged nodes that serializes to markup.
//!
//! - **`LeafNode`**: tag, value and attributes, never children
//! - **`ParentNode`**: tag, children and attributes, never a value
//! - **`Attributes`**: insertion-ordered attribute list
//!
//! Only attribute values are escaped; text values are emitted verbatim.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("Parent node <{}> has no children", .tag.as_deref().unwrap_or("fragment"))]
    MissingChildren { tag: Option<String> },
    #[error("Untagged leaf node cannot carry attributes:{attributes}")]
    TaglessAttributes { attributes: String },
}
