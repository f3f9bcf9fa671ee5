//! Pipeline command handlers: `build`, `convert`, `derive`, `render`.

use crate::cli::args::DirArgs;
use crate::config::PipelineConfig;
use crate::error::MaturityError;
use crate::observability::Progress;
use crate::pipeline;

/// Execute `build`.
///
/// # Errors
///
/// Returns the error of the first failing step.
pub fn build(args: &DirArgs, progress: Progress) -> Result<(), MaturityError> {
    let config = PipelineConfig::from(args);
    log_layout("build", &config);
    pipeline::build(&config, progress).map(drop)
}

/// Execute `convert`.
///
/// # Errors
///
/// Returns an error if a source cannot be read, parsed or written as JSON.
pub fn convert(args: &DirArgs, progress: Progress) -> Result<(), MaturityError> {
    let config = PipelineConfig::from(args);
    log_layout("convert", &config);
    progress.heading("Converting YAML source files to JSON...");
    pipeline::convert::run(&config, progress).map(drop)
}

/// Execute `derive`.
///
/// # Errors
///
/// Returns an error if the converted stores cannot be loaded or derived.
pub fn derive(args: &DirArgs, progress: Progress) -> Result<(), MaturityError> {
    let config = PipelineConfig::from(args);
    log_layout("derive", &config);
    pipeline::derive::run(&config, progress).map(drop)
}

/// Execute `render`.
///
/// # Errors
///
/// Returns an error if the build directory is missing or any page fails.
pub fn render(args: &DirArgs, progress: Progress) -> Result<(), MaturityError> {
    let config = PipelineConfig::from(args);
    log_layout("render", &config);
    pipeline::render::run(&config, progress).map(drop)
}

fn log_layout(command: &str, config: &PipelineConfig) {
    tracing::info!(
        command,
        source_dir = %config.source_dir.display(),
        build_dir = %config.build_dir.display(),
        public_dir = %config.public_dir.display(),
        max_source_bytes = config.limits.max_source_bytes,
        "starting"
    );
}
