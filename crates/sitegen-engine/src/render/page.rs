use super::{RenderError, markdown_to_html};

/// Template placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Template placeholder replaced with the rendered document.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Returns the text of the first `# ` line, trimmed.
///
/// Only level-one headings count; `## Sub` is skipped.
pub fn extract_title(markdown: &str) -> Result<String, RenderError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(RenderError::MissingTitle)
}

/// Renders `markdown` into `template`.
///
/// Fills the title and content placeholders, then points root-relative
/// `href="/` and `src="/` references at `base_path`.
pub fn render_page(template: &str, markdown: &str, base_path: &str) -> Result<String, RenderError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(rebase_links(&page, base_path))
}

/// Rewrites root-relative `href`/`src` attributes to start with `base_path`.
pub fn rebase_links(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}
