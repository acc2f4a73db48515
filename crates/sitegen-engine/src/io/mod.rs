use crate::models::SourcePage;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a file relative to `root`
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, sorted
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Scan the content directory into [`SourcePage`]s
pub fn scan_source_pages(content_root: &Path) -> Result<Vec<SourcePage>, IoError> {
    let pages = scan_markdown_files(content_root)?
        .iter()
        .filter_map(|path| {
            let page = SourcePage::from_absolute(path, content_root);
            if page.is_none() {
                log::warn!("Skipping non UTF-8 path {}", path.display());
            }
            page
        })
        .collect();
    Ok(pages)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SourcePage::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Copy every file under `from` into `to`, keeping the directory layout.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize, IoError> {
    if !from.is_dir() {
        return Err(IoError::NotFound(from.to_path_buf()));
    }
    fs::create_dir_all(to)?;

    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let path = entry?.path();
        let target = to.join(path.file_name().unwrap_or_default());
        if path.is_dir() {
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            log::debug!("copy {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Delete `dir` if present and recreate it empty.
pub fn clean_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
