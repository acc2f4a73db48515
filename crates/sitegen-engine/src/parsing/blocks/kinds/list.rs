/// Unordered list block type with owned marker constant.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    /// Returns the item text if `line` starts with the list marker.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list block type.
///
/// Items must be numbered `1. `, `2. `, `3. `... with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// Returns the item text if `line` starts with `{number}. `.
    pub fn strip_marker(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(number.to_string().as_str())
            .and_then(|rest| rest.strip_prefix(". "))
    }

    /// True if every line carries the next number in sequence, starting at 1.
    pub fn is_sequential<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .enumerate()
            .all(|(i, line)| Self::strip_marker(line, i + 1).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_marker() {
        assert_eq!(UnorderedList::strip_marker("- item"), Some("item"));
        assert_eq!(UnorderedList::strip_marker("-item"), None);
        assert_eq!(UnorderedList::strip_marker("* item"), None);
    }

    #[test]
    fn ordered_marker() {
        assert_eq!(OrderedList::strip_marker("1. first", 1), Some("first"));
        assert_eq!(OrderedList::strip_marker("12. twelfth", 12), Some("twelfth"));
        assert_eq!(OrderedList::strip_marker("1.first", 1), None);
        assert_eq!(OrderedList::strip_marker("2. second", 1), None);
    }

    #[test]
    fn ordered_number_prefix_must_match_exactly() {
        // "10. " must not satisfy item 1
        assert_eq!(OrderedList::strip_marker("10. ten", 1), None);
    }

    #[test]
    fn sequential_numbering() {
        assert!(OrderedList::is_sequential(["1. a", "2. b", "3. c"]));
        assert!(!OrderedList::is_sequential(["2. a", "3. b"]));
        assert!(!OrderedList::is_sequential(["1. a", "3. b"]));
        assert!(!OrderedList::is_sequential(["1. a", "1. b"]));
    }
}
