//! Core error types for the maturity pipeline
//!
//! Source loading, derivation and validation error types shared across the
//! workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Source Errors
// ============================================================================

/// Source file loading and parsing errors.
///
/// These cover every failure between "a path on disk" and "a typed model or
/// guide store in memory".
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source file does not exist
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Source file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Source file has no content
    #[error("{path} is empty")]
    Empty {
        /// Path to the empty file
        path: PathBuf,
    },

    /// Source file is larger than the configured limit
    #[error("{path} is {size} bytes, exceeding the {limit} byte source limit")]
    TooLarge {
        /// Path to the oversized file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// YAML or JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the source file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Converted document could not be serialized
    #[error("failed to encode {path}: {message}")]
    Encode {
        /// Path of the document being written
        path: PathBuf,
        /// Error message from the serializer
        message: String,
    },
}

// ============================================================================
// Derivation Errors
// ============================================================================

/// Errors raised while deriving the practice index or merged guide view.
///
/// Every variant is fatal for a derivation run: no derived view is produced
/// when any of them occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// Model and guide disagree on the number of levels
    #[error(
        "level count mismatch: model has {model} level(s) but guide has {guide} level(s)"
    )]
    LevelCountMismatch {
        /// Number of levels in the model store
        model: usize,
        /// Number of levels in the guide overlay store
        guide: usize,
    },

    /// Level id is not `levelN` with a positive integer `N`
    #[error("malformed level id \"{id}\" at levels[{index}]: expected \"levelN\" with N >= 1")]
    MalformedLevelId {
        /// Position of the level in the model
        index: usize,
        /// The offending id
        id: String,
    },

    /// Level name lacks the `": "` separator or has an empty label
    #[error("malformed level name \"{name}\" for {id}: expected \"Level N: <label>\"")]
    MalformedLevelName {
        /// Id of the level carrying the name
        id: String,
        /// The offending name
        name: String,
    },

    /// Two levels share an id
    #[error("duplicate level id \"{id}\" at levels[{index}], first seen at levels[{first}]")]
    DuplicateLevelId {
        /// The repeated id
        id: String,
        /// Position of the repeat
        index: usize,
        /// Position of the first occurrence
        first: usize,
    },

    /// Two practices share an id anywhere in the model
    #[error("duplicate practice id \"{id}\" in {level}, first seen in {first_level}")]
    DuplicatePracticeId {
        /// The repeated practice id
        id: String,
        /// Level containing the repeat
        level: String,
        /// Level containing the first occurrence
        first_level: String,
    },

    /// Some guide records carry an `id` and some do not
    #[error("guide mixes keyed and unkeyed records: {keyed} of {total} carry an id")]
    MixedOverlayKeys {
        /// Records with an `id`
        keyed: usize,
        /// Total number of records
        total: usize,
    },

    /// A guide record names a level the model does not have
    #[error("guide references unknown level \"{id}\"{}", suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean \"{s}\"?)")))]
    UnknownOverlayLevel {
        /// The unmatched overlay id
        id: String,
        /// Closest model level id, if any is similar
        suggestion: Option<String>,
    },

    /// Two guide records name the same level
    #[error("guide has more than one record for level \"{id}\"")]
    DuplicateOverlayLevel {
        /// The repeated overlay id
        id: String,
    },

    /// A model level has no guide record naming it
    #[error("level \"{id}\" has no guide record")]
    MissingOverlayLevel {
        /// The level without guidance
        id: String,
    },
}

impl DeriveError {
    /// Returns the document path this error refers to.
    ///
    /// Paths use the same dotted/indexed notation as validation issues
    /// (e.g. `"levels[2].id"`).
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::LevelCountMismatch { .. } | Self::MixedOverlayKeys { .. } => {
                "levels".to_string()
            }
            Self::MalformedLevelId { index, .. } | Self::DuplicateLevelId { index, .. } => {
                format!("levels[{index}].id")
            }
            Self::MalformedLevelName { id, .. } => format!("{id}.name"),
            Self::DuplicatePracticeId { level, .. } => format!("{level}.practices"),
            Self::UnknownOverlayLevel { id, .. } | Self::DuplicateOverlayLevel { id } => {
                format!("guide.{id}")
            }
            Self::MissingOverlayLevel { id } => id.clone(),
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found while validating the source stores.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Document path to the problematic field (e.g., "levels[0].name")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Builds an error-severity issue from a derivation error.
    #[must_use]
    pub fn from_derive(err: &DeriveError) -> Self {
        Self {
            path: err.location(),
            message: err.to_string(),
            severity: Severity::Error,
        }
    }

    /// Builds a warning-severity issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the sources cannot be derived or rendered
    Error,
    /// Warning - suspicious content that still derives
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "levels[0].id".to_string(),
            message: "malformed id".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(issue.to_string(), "error: malformed id at levels[0].id");
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue::warning("level1.practices", "no practices");
        assert_eq!(issue.to_string(), "warning: no practices at level1.practices");
    }

    #[test]
    fn test_level_count_mismatch_names_both_counts() {
        let err = DeriveError::LevelCountMismatch { model: 3, guide: 2 };
        let msg = err.to_string();
        assert!(msg.contains('3'), "{msg}");
        assert!(msg.contains('2'), "{msg}");
    }

    #[test]
    fn test_unknown_overlay_suggestion_display() {
        let err = DeriveError::UnknownOverlayLevel {
            id: "levle2".to_string(),
            suggestion: Some("level2".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "guide references unknown level \"levle2\" (did you mean \"level2\"?)"
        );

        let err = DeriveError::UnknownOverlayLevel {
            id: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "guide references unknown level \"zzz\"");
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = SourceError::ParseError {
            path: PathBuf::from("src/model.yaml"),
            line: Some(12),
            message: "unexpected token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error in src/model.yaml (line 12): unexpected token"
        );
    }

    #[test]
    fn test_derive_error_location() {
        let err = DeriveError::MalformedLevelId {
            index: 2,
            id: "stage3".to_string(),
        };
        assert_eq!(err.location(), "levels[2].id");
        assert_eq!(
            ValidationIssue::from_derive(&err).severity,
            Severity::Error
        );
    }
}
