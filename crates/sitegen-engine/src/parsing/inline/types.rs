use super::kinds::Style;

/// The kind of an inline span.
///
/// Destinations live in the `Link`/`Image` payloads, so only those two
/// kinds can ever carry a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKind {
    /// Text with no styling.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[label](url)`
    Link {
        /// Link destination.
        url: String,
    },
    /// `![alt](url)`
    Image {
        /// Image source.
        url: String,
    },
}

impl From<Style> for TextKind {
    fn from(style: Style) -> Self {
        match style {
            Style::Bold => TextKind::Bold,
            Style::Italic => TextKind::Italic,
            Style::Code => TextKind::Code,
        }
    }
}

/// A tokenized span of inline content.
///
/// For links `text` is the label, for images it is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextKind::Image { url: url.into() })
    }

    /// Returns the destination for links and images.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Link { url } | TextKind::Image { url } => Some(url.as_str()),
            TextKind::Plain | TextKind::Bold | TextKind::Italic | TextKind::Code => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, TextKind::Plain)
    }
}
