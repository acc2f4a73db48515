/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    pub fn level(block: &str) -> Option<usize> {
        let b = block.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if (1..=Self::MAX_LEVEL).contains(&level) && b.get(level) == Some(&b' ') {
            Some(level)
        } else {
            None
        }
    }

    /// Splits a heading block into its level and the text after the
    /// marker and its space.
    pub fn split(block: &str) -> Option<(usize, &str)> {
        Self::level(block).map(|level| (level, &block[level + 1..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(Heading::level("# One"), Some(1));
        assert_eq!(Heading::level("###### Six"), Some(6));
    }

    #[test]
    fn too_many_hashes() {
        assert_eq!(Heading::level("####### Seven"), None);
    }

    #[test]
    fn requires_space() {
        assert_eq!(Heading::level("###No space"), None);
        assert_eq!(Heading::level("#"), None);
    }

    #[test]
    fn text_after_marker() {
        assert_eq!(Heading::split("## Sub title"), Some((2, "Sub title")));
        assert_eq!(Heading::split("plain"), None);
    }
}
