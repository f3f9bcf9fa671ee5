//! Convert step: YAML sources to JSON stores.
//!
//! The conversion is untyped so fields the schema does not model survive
//! into `model.json` unchanged.

use std::path::{Path, PathBuf};

use maturity_core::convert::yaml_text_to_json;
use maturity_core::source::{SourceLimits, read_source};

use super::{to_pretty_json, write_output};
use crate::config::{PipelineConfig, file_name};
use crate::error::MaturityError;
use crate::observability::Progress;

/// Convert both sources, returning the files written.
///
/// # Errors
///
/// Returns `MaturityError::Source` if a source is missing, empty or not
/// valid YAML, and `MaturityError::Write` if a JSON file cannot be written.
pub fn run(config: &PipelineConfig, progress: Progress) -> Result<Vec<PathBuf>, MaturityError> {
    let mut written = Vec::new();
    for (source, target) in config.conversions() {
        convert_file(&source, &target, config.limits, progress)?;
        written.push(target);
    }
    progress.line("\nYAML → JSON conversion complete!");
    Ok(written)
}

/// Convert one YAML file to pretty-printed JSON.
///
/// # Errors
///
/// See [`run`].
pub fn convert_file(
    source: &Path,
    target: &Path,
    limits: SourceLimits,
    progress: Progress,
) -> Result<(), MaturityError> {
    progress.line(format_args!("Converting {} → JSON...", file_name(source)));

    let text = read_source(source, limits)?;
    let json = yaml_text_to_json(&text, source)?;
    write_output(target, &to_pretty_json(&json)?)?;

    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        "converted source"
    );
    progress.done(format_args!("Generated {}", file_name(target)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_core::error::SourceError;
    use std::fs;

    fn config(dir: &Path) -> PipelineConfig {
        PipelineConfig::new(dir.join("src"), dir.join("build"), dir.join("public"))
    }

    #[test]
    fn test_converts_both_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        fs::create_dir_all(&config.source_dir).unwrap();
        fs::write(
            config.model_source(),
            "levels:\n  - id: level1\n    name: \"Level 1: A\"\n    extra: kept\n",
        )
        .unwrap();
        fs::write(config.guide_source(), "levels:\n  - readyWhen: [x]\n").unwrap();

        let written = run(&config, Progress::new(true)).unwrap();
        assert_eq!(written, vec![config.model_json(), config.guide_source_json()]);

        let model = fs::read_to_string(config.model_json()).unwrap();
        assert_eq!(
            model,
            "{\n  \"levels\": [\n    {\n      \"id\": \"level1\",\n      \"name\": \"Level 1: A\",\n      \"extra\": \"kept\"\n    }\n  ]\n}\n"
        );
    }

    #[test]
    fn test_missing_source_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(dir.path()), Progress::new(true)).unwrap_err();
        assert!(matches!(
            err,
            MaturityError::Source(SourceError::MissingFile { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("model.yaml");
        fs::write(&source, "levels: [unclosed\n").unwrap();

        let err = convert_file(
            &source,
            &dir.path().join("model.json"),
            SourceLimits::default(),
            Progress::new(true),
        )
        .unwrap_err();
        assert!(err.to_string().contains("model.yaml"), "{err}");
        assert!(!dir.path().join("model.json").exists());
    }
}
