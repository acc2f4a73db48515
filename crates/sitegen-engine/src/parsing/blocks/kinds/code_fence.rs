/// Fenced code block type with owned delimiter constant.
///
/// Code blocks are raw zones: their content is never inline-tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if the block both opens and closes with a backtick fence.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Returns the content between the fences.
    ///
    /// One line break directly inside each fence is dropped; everything
    /// else is kept verbatim.
    pub fn inner(block: &str) -> &str {
        let inner = block
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
            .unwrap_or_default();
        let inner = inner.strip_prefix('\n').unwrap_or(inner);
        inner.strip_suffix('\n').unwrap_or(inner)
    }
}
