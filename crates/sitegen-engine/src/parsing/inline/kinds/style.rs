/// A delimiter-bounded inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// Styles in the order the tokenizer resolves them.
    ///
    /// Code goes first so `**` or `_` inside backticks stay literal.
    pub const PIPELINE: [Style; 3] = [Style::Code, Style::Bold, Style::Italic];

    /// The literal marker that opens and closes this style.
    pub const fn delimiter(self) -> &'static str {
        match self {
            Style::Bold => "**",
            Style::Italic => "_",
            Style::Code => "`",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters() {
        assert_eq!(Style::Bold.delimiter(), "**");
        assert_eq!(Style::Italic.delimiter(), "_");
        assert_eq!(Style::Code.delimiter(), "`");
    }

    #[test]
    fn code_is_resolved_first() {
        assert_eq!(Style::PIPELINE[0], Style::Code);
    }
}
