//! Error types for the `maturity` CLI
//!
//! Aggregates the source, derivation and render errors of the library
//! crates and maps each to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use maturity_core::error::{DeriveError, SourceError};
use maturity_html::RenderError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `maturity` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Source error (missing, empty or malformed source, failed validation)
    pub const SOURCE_ERROR: i32 = 2;

    /// I/O error (unwritable output, missing build directory)
    pub const IO_ERROR: i32 = 3;

    /// Derivation error (level count mismatch, malformed identity)
    pub const DERIVE_ERROR: i32 = 4;

    /// Render error (page input does not match its schema)
    pub const RENDER_ERROR: i32 = 5;

    /// Usage error (invalid arguments, unknown subcommand)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `maturity` operations.
#[derive(Debug, Error)]
pub enum MaturityError {
    /// Source loading or parsing error
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Derivation error
    #[error(transparent)]
    Derive(#[from] DeriveError),

    /// Page rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory the step reads from does not exist
    #[error("{what} directory not found: {path}")]
    MissingDirectory {
        /// Which directory (`build`, `source`)
        what: &'static str,
        /// The missing path
        path: PathBuf,
    },

    /// Validation reported errors (or warnings under `--strict`)
    #[error("validation failed with {count} issue(s)")]
    ValidationFailed {
        /// Number of issues counted as failures
        count: usize,
    },

    /// One or more pages failed to render
    #[error("{failed} of {total} page(s) failed to render")]
    RenderFailed {
        /// Pages that failed
        failed: usize,
        /// Pages attempted
        total: usize,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MaturityError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Json(_) => ExitCode::ERROR,
            Self::Source(_) | Self::ValidationFailed { .. } => ExitCode::SOURCE_ERROR,
            Self::Write { .. } | Self::MissingDirectory { .. } => ExitCode::IO_ERROR,
            Self::Derive(_) => ExitCode::DERIVE_ERROR,
            Self::Render(_) | Self::RenderFailed { .. } => ExitCode::RENDER_ERROR,
        }
    }
}
