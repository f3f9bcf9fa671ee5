//! Derive step: converted stores to `assessment.json` and `guide.json`.

use std::path::PathBuf;

use maturity_core::derive::{DerivedViews, derive_all, guide_view};
use maturity_core::source::{load_guide, load_model};

use super::{to_pretty_json, write_outputs_atomically};
use crate::config::{PipelineConfig, file_name};
use crate::error::MaturityError;
use crate::observability::Progress;

/// Result of a successful derive step.
#[derive(Debug, Clone)]
pub struct DeriveOutcome {
    /// The views that were written.
    pub views: DerivedViews,
    /// Files written, assessment first.
    pub written: Vec<PathBuf>,
}

/// Derive both views and write them.
///
/// Both views are derived and serialized before either file is written, and
/// the two files are replaced together, so any failure leaves the previous
/// outputs untouched.
///
/// # Errors
///
/// Returns `MaturityError::Source` if a converted store is missing or does
/// not match the schema, `MaturityError::Derive` if derivation fails, and
/// `MaturityError::Write` if an output cannot be written.
pub fn run(config: &PipelineConfig, progress: Progress) -> Result<DeriveOutcome, MaturityError> {
    progress.line("Reading source files...");
    let model = load_model(&config.model_json(), config.limits)?;
    let guide = load_guide(&config.guide_source_json(), config.limits)?;

    tracing::debug!(
        model_levels = model.levels.len(),
        guide_levels = guide.levels.len(),
        alignment = ?guide_view::alignment(&guide).ok(),
        "loaded stores"
    );

    progress.line("Generating derived data files...");
    let views = derive_all(&model, &guide)?;

    let outputs = [
        (config.assessment_json(), to_pretty_json(&views.assessment)?),
        (config.guide_json(), to_pretty_json(&views.guide)?),
    ];

    write_outputs_atomically(&outputs)?;

    let mut written = Vec::with_capacity(outputs.len());
    for (path, text) in outputs {
        tracing::info!(output = %path.display(), bytes = text.len(), "wrote derived view");
        progress.done(format_args!("Generated {}", file_name(&path)));
        written.push(path);
    }

    tracing::debug!(
        practices = views.assessment.practices.len(),
        levels = views.guide.levels.len(),
        "derivation complete"
    );

    progress.line("\nDerived data generation complete!");
    progress.line("  • assessment.json - Auto-generated from model.json");
    progress.line("  • guide.json - Auto-generated from model.json + guide-source.json");

    Ok(DeriveOutcome { views, written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_core::error::DeriveError;
    use std::fs;
    use std::path::Path;

    const MODEL: &str = r#"{"levels": [
        {"id": "level1", "name": "Level 1: Foundational Practices",
         "practices": [{"id": "p1", "name": "A"}, {"id": "p2", "name": "B"}]},
        {"id": "level2", "name": "Level 2: Scaling",
         "practices": [{"id": "p3", "name": "C"}]}
    ]}"#;

    /// Guide store with one complete record per `ready_when` entry.
    fn guide(ready_when: &[&str]) -> String {
        let records: Vec<String> = ready_when
            .iter()
            .map(|r| {
                format!(
                    r#"{{"readyWhen": ["{r}"], "startHere": {{"title": "Begin"}}, "quickWins": [],
                       "pitfalls": [], "successLooks": [], "nextLevel": []}}"#
                )
            })
            .collect();
        format!(r#"{{"levels": [{}]}}"#, records.join(", "))
    }

    fn config(dir: &Path, guide: &str) -> PipelineConfig {
        let config = PipelineConfig::new(dir.join("src"), dir.join("build"), dir.join("public"));
        fs::create_dir_all(&config.build_dir).unwrap();
        fs::write(config.model_json(), MODEL).unwrap();
        fs::write(config.guide_source_json(), guide).unwrap();
        config
    }

    #[test]
    fn test_writes_both_views() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &guide(&["a", "b"]));

        let outcome = run(&config, Progress::new(true)).unwrap();
        assert_eq!(outcome.written, vec![config.assessment_json(), config.guide_json()]);
        assert_eq!(outcome.views.assessment.practices.len(), 3);

        let assessment: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(config.assessment_json()).unwrap()).unwrap();
        assert_eq!(
            assessment["practices"][2],
            serde_json::json!({"id": "p3", "name": "C", "level": 2, "levelName": "Scaling"})
        );
    }

    #[test]
    fn test_mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &guide(&["a"]));

        let err = run(&config, Progress::new(true)).unwrap_err();
        assert!(matches!(
            err,
            MaturityError::Derive(DeriveError::LevelCountMismatch { model: 2, guide: 1 })
        ));
        assert!(!config.assessment_json().exists());
        assert!(!config.guide_json().exists());
    }

    #[test]
    fn test_failure_keeps_previous_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &guide(&[]));
        fs::write(config.assessment_json(), "previous").unwrap();

        assert!(run(&config, Progress::new(true)).is_err());
        assert_eq!(fs::read_to_string(config.assessment_json()).unwrap(), "previous");
    }

    #[test]
    fn test_unwritable_guide_keeps_previous_assessment() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &guide(&["a", "b"]));
        fs::write(config.assessment_json(), "previous").unwrap();
        fs::create_dir(config.guide_json()).unwrap();

        let err = run(&config, Progress::new(true)).unwrap_err();
        assert!(matches!(err, MaturityError::Write { ref path, .. } if path == &config.guide_json()));
        assert_eq!(fs::read_to_string(config.assessment_json()).unwrap(), "previous");
        assert!(!config.build_dir.join("assessment.json.tmp").exists());
        assert!(!config.build_dir.join("guide.json.tmp").exists());
    }

    #[test]
    fn test_repeat_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &guide(&["q", "p"]));

        run(&config, Progress::new(true)).unwrap();
        let first = fs::read(config.guide_json()).unwrap();
        run(&config, Progress::new(true)).unwrap();
        assert_eq!(fs::read(config.guide_json()).unwrap(), first);
    }
}
