//! Render step: build JSON to `public/*.html`.
//!
//! A page that fails is reported and skipped; the remaining pages still
//! render and the step fails afterwards with the number of failures.

use std::path::PathBuf;

use maturity_core::source::read_source;
use maturity_html::{Page, create_renderer};

use super::write_output;
use crate::config::PipelineConfig;
use crate::error::MaturityError;
use crate::observability::Progress;

/// Render every page, returning the files written.
///
/// # Errors
///
/// Returns `MaturityError::MissingDirectory` if the build directory does
/// not exist, and `MaturityError::RenderFailed` if any page fails.
pub fn run(config: &PipelineConfig, progress: Progress) -> Result<Vec<PathBuf>, MaturityError> {
    if !config.build_dir.is_dir() {
        return Err(MaturityError::MissingDirectory {
            what: "build",
            path: config.build_dir.clone(),
        });
    }

    progress.line("Generating HTML files from JSON data...");

    let mut written = Vec::new();
    let mut failed = 0;
    for page in Page::ALL {
        match render_page(config, page) {
            Ok(path) => {
                progress.done(format_args!("Generated {}", page.output_file()));
                written.push(path);
            }
            Err(e) => {
                tracing::debug!(page = %page, error = %e, "page failed");
                progress.failed(format_args!("Error generating {}: {e}", page.output_file()));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(MaturityError::RenderFailed {
            failed,
            total: Page::ALL.len(),
        });
    }

    progress.line("\nAll HTML files generated successfully!");
    Ok(written)
}

/// Render one page from its build-directory document.
///
/// # Errors
///
/// Returns `MaturityError::Source` if the input is missing or unreadable,
/// `MaturityError::Render` if it does not match the page's schema, and
/// `MaturityError::Write` if the page cannot be written.
pub fn render_page(config: &PipelineConfig, page: Page) -> Result<PathBuf, MaturityError> {
    let input = config.page_input(page);
    let json = read_source(&input, config.limits)?;
    let html = create_renderer(page)
        .render_json(&json)
        .inspect_err(|e| {
            tracing::warn!(page = e.page(), input = %input.display(), "page data rejected");
        })?;

    let output = config.page_output(page);
    write_output(&output, &html)?;
    tracing::info!(
        page = %page,
        input = %input.display(),
        output = %output.display(),
        bytes = html.len(),
        "rendered page"
    );
    Ok(output)
}
