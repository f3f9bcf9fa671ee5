//! `export-yaml` command handler.
//!
//! One-way JSON → YAML migration for sources that were authored as JSON.
//! Mapping key order is kept so the YAML reads like the original document.

use maturity_core::convert::json_to_yaml_text;
use maturity_core::source::{SourceFormat, SourceLimits, parse_str, read_source};

use crate::cli::args::ExportYamlArgs;
use crate::config::file_name;
use crate::error::MaturityError;
use crate::observability::Progress;
use crate::pipeline::write_output;

/// Execute `export-yaml`.
///
/// # Errors
///
/// Returns `MaturityError::Source` if the input is missing or not valid
/// JSON, and `MaturityError::Write` if the output cannot be written.
pub fn run(args: &ExportYamlArgs, progress: Progress) -> Result<(), MaturityError> {
    progress.line(format_args!(
        "Converting {} → {}...",
        file_name(&args.input),
        file_name(&args.output)
    ));

    let text = read_source(&args.input, SourceLimits::default())?;
    let json: serde_json::Value = parse_str(&text, &args.input, SourceFormat::Json)?;
    let yaml = json_to_yaml_text(&json, &args.output)?;
    write_output(&args.output, &yaml)?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "exported YAML"
    );
    progress.done(format_args!("Created {}", file_name(&args.output)));
    Ok(())
}
