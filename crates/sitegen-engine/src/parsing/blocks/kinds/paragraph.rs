/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other rule matches. Line breaks inside a paragraph fold to spaces.
pub struct Paragraph;

impl Paragraph {
    /// Joins the lines of a paragraph block with single spaces.
    pub fn fold_lines(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
