/// Classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Opens and closes with a backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence.
    OrderedList,
}

/// A trimmed, non-empty chunk of document text with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockType,
    pub text: String,
}
