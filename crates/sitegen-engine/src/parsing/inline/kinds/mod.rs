//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Style`**: delimited styles and their markers (`**`, `_`, `` ` ``)
//! - **`Markup`**: bracket-paren grammar shared by links and images
//!
//! The splitter and scanner read these constants; they never hardcode `**` or `](`.

pub mod markup;
pub mod style;

pub use markup::Markup;
pub use style::Style;
