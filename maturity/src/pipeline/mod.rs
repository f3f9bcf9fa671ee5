//! Build pipeline
//!
//! Three steps, each reading what the previous one wrote:
//! - [`convert`]: `src/*.yaml` → `build/model.json`, `build/guide-source.json`
//! - [`derive`]: converted stores → `build/assessment.json`, `build/guide.json`
//! - [`render`]: build JSON → `public/*.html`
//!
//! [`build`] runs all three and stops at the first failing step.

pub mod convert;
pub mod derive;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::error::MaturityError;
use crate::observability::Progress;

/// Files written by a full build, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Converted source stores.
    pub converted: Vec<PathBuf>,
    /// Derived views.
    pub derived: Vec<PathBuf>,
    /// Rendered pages.
    pub pages: Vec<PathBuf>,
}

/// Run convert, derive and render in order.
///
/// # Errors
///
/// Returns the error of the first step that fails; later steps do not run.
pub fn build(config: &PipelineConfig, progress: Progress) -> Result<BuildSummary, MaturityError> {
    progress.rule('=');
    progress.line("PM Maturity Model - HTML Build Process");
    progress.rule('=');
    progress.line("");

    progress.heading("Step 1: Converting YAML to JSON...");
    let converted = convert::run(config, progress)?;
    progress.line("");

    progress.heading("Step 2: Generating derived data files...");
    let derived = derive::run(config, progress)?.written;
    progress.line("");

    progress.heading("Step 3: Generating HTML files...");
    let pages = render::run(config, progress)?;
    progress.line("");

    tracing::info!(
        converted = converted.len(),
        derived = derived.len(),
        pages = pages.len(),
        "build complete"
    );

    progress.rule('=');
    progress.line("✅ Build complete! HTML files have been generated.");
    progress.rule('=');
    progress.line("");
    progress.line("Generated files:");
    for page in &pages {
        progress.line(format_args!("  • {}", page.display()));
    }
    progress.line("");

    Ok(BuildSummary {
        converted,
        derived,
        pages,
    })
}

/// Serialize a value as pretty-printed JSON (two-space indent, trailing
/// newline).
///
/// # Errors
///
/// Returns `MaturityError::Json` if the value cannot be serialized.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, MaturityError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Write `contents` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns `MaturityError::Write` naming the path on any I/O failure.
pub fn write_output(path: &Path, contents: &str) -> Result<(), MaturityError> {
    let write_error = |source| MaturityError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)
}

/// Write every `(path, contents)` pair, or none of them.
///
/// Each file is staged as a `.tmp` sibling and renamed into place only once
/// all staging writes succeed. If a rename fails, targets already replaced
/// get their previous contents back (or are removed if they did not exist).
///
/// # Errors
///
/// Returns `MaturityError::Write` naming the first path that failed.
pub fn write_outputs_atomically(outputs: &[(PathBuf, String)]) -> Result<(), MaturityError> {
    let mut staged = Vec::with_capacity(outputs.len());
    for (path, contents) in outputs {
        let tmp = staging_path(path);
        if let Err(e) = write_output(&tmp, contents) {
            discard(staged.iter().map(|(tmp, _): &(PathBuf, &Path)| tmp.as_path()));
            return Err(e);
        }
        staged.push((tmp, path.as_path()));
    }

    let mut committed: Vec<(&Path, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for (i, (tmp, path)) in staged.iter().enumerate() {
        let previous = fs::read(path).ok();
        if let Err(source) = fs::rename(tmp, path) {
            discard(staged[i..].iter().map(|(tmp, _)| tmp.as_path()));
            restore(&committed);
            return Err(MaturityError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        committed.push((*path, previous));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard<'a>(paths: impl Iterator<Item = &'a Path>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove staged output");
        }
    }
}

fn restore(committed: &[(&Path, Option<Vec<u8>>)]) {
    for (path, previous) in committed {
        let result = match previous {
            Some(bytes) => fs::write(path, bytes),
            None => fs::remove_file(path),
        };
        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "failed to roll back output");
        }
    }
}
