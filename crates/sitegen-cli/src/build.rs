use anyhow::{Context, Result};
use relative_path::RelativePath;
use sitegen_config::Config;
use sitegen_engine::{SourcePage, io, render_page};
use std::path::Path;

/// Counts reported at the end of a build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub static_files: usize,
}

/// Builds the whole site described by `config`.
///
/// The output directory is wiped first. A page that fails to render
/// aborts the build.
pub fn build_site(config: &Config) -> Result<BuildSummary> {
    log::info!(
        "Building {} -> {} (base path {})",
        config.content_dir.display(),
        config.output_dir.display(),
        config.base_path
    );

    io::clean_dir(&config.output_dir)
        .with_context(|| format!("cleaning {}", config.output_dir.display()))?;

    let static_files = if config.static_dir.is_dir() {
        io::copy_dir_recursive(&config.static_dir, &config.output_dir)
            .with_context(|| format!("copying {}", config.static_dir.display()))?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let template = std::fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;

    let pages = io::scan_source_pages(&config.content_dir)
        .with_context(|| format!("scanning {}", config.content_dir.display()))?;
    for page in &pages {
        generate_page(page, &template, config)?;
    }

    let summary = BuildSummary {
        pages: pages.len(),
        static_files,
    };
    log::info!(
        "Built {} pages, copied {} static files",
        summary.pages,
        summary.static_files
    );
    Ok(summary)
}

fn generate_page(page: &SourcePage, template: &str, config: &Config) -> Result<()> {
    log::debug!(
        "Generating {} from {}",
        page.output_path(),
        page.source_path()
    );
    let markdown = io::read_file(page.source_path(), &config.content_dir)?;
    let html = render_page(template, &markdown, &config.base_path)
        .with_context(|| format!("rendering {}", page.source_path()))?;
    write_output(page.output_path(), &config.output_dir, &html)
}

fn write_output(relative: &RelativePath, output_dir: &Path, html: &str) -> Result<()> {
    io::write_file(relative, output_dir, html)
        .with_context(|| format!("writing {}", relative.to_path(output_dir).display()))
}
