use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A Markdown source file and the page it renders to.
///
/// Both paths are relative: the source to the content root, the output
/// to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage {
    source_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl SourcePage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new SourcePage from a path relative to the content root
    pub fn new(source_path: RelativePathBuf) -> Self {
        let output_path = source_path.with_extension(Self::OUTPUT_EXTENSION);
        Self {
            source_path,
            output_path,
        }
    }

    /// Create from an absolute path inside `content_root`.
    ///
    /// Returns `None` if `path` is outside the root or not valid UTF-8.
    pub fn from_absolute(path: &Path, content_root: &Path) -> Option<Self> {
        let relative = path.strip_prefix(content_root).ok()?;
        let relative = RelativePathBuf::from_path(relative).ok()?;
        Some(Self::new(relative))
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn source_path(&self) -> &RelativePath {
        &self.source_path
    }

    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<&str> for SourcePage {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn output_swaps_extension() {
        let page = SourcePage::from("blog/post.md");
        assert_eq!(page.source_path().as_str(), "blog/post.md");
        assert_eq!(page.output_path().as_str(), "blog/post.html");
    }

    #[test]
    fn index_page_stays_index() {
        let page = SourcePage::from("index.md");
        assert_eq!(page.output_path().as_str(), "index.html");
    }

    #[test]
    fn from_absolute_inside_root() {
        let root = PathBuf::from("/site/content");
        let page = SourcePage::from_absolute(&root.join("a/b.md"), &root).unwrap();
        assert_eq!(page.source_path().as_str(), "a/b.md");
        assert_eq!(page.output_path().as_str(), "a/b.html");
    }

    #[test]
    fn from_absolute_outside_root() {
        let root = PathBuf::from("/site/content");
        assert!(SourcePage::from_absolute(Path::new("/elsewhere/x.md"), &root).is_none());
    }
}
