//! `validate` command handler.
//!
//! Loads both YAML sources and reports every issue at once without writing
//! anything.

use serde::Serialize;

use maturity_core::error::{Severity, ValidationIssue};
use maturity_core::source::{SourceLimits, load_guide, load_model};
use maturity_core::validate::validate_sources;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::{GUIDE_SOURCE, MODEL_SOURCE};
use crate::error::MaturityError;
use crate::observability::Progress;

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    errors: usize,
    warnings: usize,
    issues: Vec<IssueRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct IssueRecord<'a> {
    severity: &'static str,
    path: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ValidationIssue> for IssueRecord<'a> {
    fn from(issue: &'a ValidationIssue) -> Self {
        Self {
            severity: severity_name(issue.severity),
            path: &issue.path,
            message: &issue.message,
        }
    }
}

const fn severity_name(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

/// Execute `validate`.
///
/// # Errors
///
/// Returns `MaturityError::Source` if a source cannot be loaded, and
/// `MaturityError::ValidationFailed` if any error is found (or any warning
/// with `--strict`).
pub fn run(args: &ValidateArgs, progress: Progress) -> Result<(), MaturityError> {
    let model_path = args.source_dir.join(MODEL_SOURCE);
    let guide_path = args.source_dir.join(GUIDE_SOURCE);
    let limits = SourceLimits::default();

    tracing::info!(
        model = %model_path.display(),
        guide = %guide_path.display(),
        strict = args.strict,
        "validating sources"
    );
    progress.line("Validating maturity model sources...");

    let model = load_model(&model_path, limits)?;
    let guide = load_guide(&guide_path, limits)?;
    let issues = validate_sources(&model, &guide);

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;
    let count = if args.strict { issues.len() } else { errors };

    match args.format {
        OutputFormat::Human => {
            for issue in &issues {
                println!("{issue}");
            }
            println!("{errors} error(s), {warnings} warning(s)");
        }
        OutputFormat::Json => {
            let report = ValidationReport {
                valid: count == 0,
                errors,
                warnings,
                issues: issues.iter().map(IssueRecord::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    tracing::debug!(errors, warnings, "validation finished");

    if count > 0 {
        return Err(MaturityError::ValidationFailed { count });
    }
    progress.done("Sources are valid");
    Ok(())
}
