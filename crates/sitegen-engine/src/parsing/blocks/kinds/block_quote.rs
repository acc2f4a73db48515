/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True if the line carries a quote prefix.
    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the `>` prefix and at most one following space.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}
