//! Source validation.
//!
//! Reports every problem in the model and guide stores at once: the
//! identity and alignment errors that would stop derivation, plus
//! warnings for content that derives but probably renders wrong.

use crate::derive::{guide_view, identity};
use crate::error::ValidationIssue;
use crate::model::guide::GuideSource;
use crate::model::{LEVEL_NAME_SEPARATOR, Level, MaturityModel, parse_rank};

/// Validate both stores.
///
/// Returns errors first (in derivation order), then warnings. An empty
/// list means the sources are clean.
#[must_use]
pub fn validate_sources(model: &MaturityModel, guide: &GuideSource) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = guide_view::check_overlay(model, guide)
        .iter()
        .chain(identity::check_model(model).iter())
        .map(ValidationIssue::from_derive)
        .collect();

    for level in &model.levels {
        issues.extend(level_warnings(level));
    }

    issues
}

/// Content warnings for one level.
#[must_use]
pub fn level_warnings(level: &Level) -> Vec<ValidationIssue> {
    let mut warnings = Vec::new();

    if let (Some(rank), Some((prefix, label))) =
        (parse_rank(&level.id), level.name.split_once(LEVEL_NAME_SEPARATOR))
    {
        let expected = format!("Level {rank}");
        if prefix != expected {
            warnings.push(ValidationIssue::warning(
                format!("{}.name", level.id),
                format!("name prefix \"{prefix}\" does not match id, expected \"{expected}\""),
            ));
        }
        if label.contains(LEVEL_NAME_SEPARATOR) {
            warnings.push(ValidationIssue::warning(
                format!("{}.name", level.id),
                format!("label \"{label}\" contains a further \": \" separator"),
            ));
        }
    }

    if level.practices.is_empty() {
        warnings.push(ValidationIssue::warning(
            format!("{}.practices", level.id),
            "level has no practices",
        ));
    }

    for practice in &level.practices {
        let path = format!("{}.{}", level.id, practice.id);
        if practice.criteria.is_empty() {
            warnings.push(ValidationIssue::warning(
                format!("{path}.criteria"),
                "practice has no pass criteria",
            ));
        }
        if let Some(ai) = &practice.ai {
            if ai.enabled && ai.examples.is_empty() {
                warnings.push(ValidationIssue::warning(
                    format!("{path}.ai"),
                    "AI acceleration enabled without examples",
                ));
            }
        }
    }

    warnings
}
