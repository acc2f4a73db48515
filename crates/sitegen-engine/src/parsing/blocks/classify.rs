use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block, first matching rule wins.
///
/// Order: heading, code, quote, unordered list, ordered list, paragraph.
/// Quote and list rules apply to every line; one line off the pattern
/// makes the whole block a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if Heading::level(block).is_some() {
        return BlockType::Heading;
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if block.lines().all(BlockQuote::is_quoted) {
        return BlockType::Quote;
    }
    if block
        .lines()
        .all(|line| UnorderedList::strip_marker(line).is_some())
    {
        return BlockType::UnorderedList;
    }
    if OrderedList::is_sequential(block.lines()) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
