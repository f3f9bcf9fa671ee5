//! Source loading (`model.yaml`, `guide.yaml` and their JSON conversions)
//!
//! Reads a file with a size limit, rejects empty files, picks the parser
//! from the file extension and deserializes into the typed stores. Parse
//! errors keep the line number when the parser reports one.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::model::MaturityModel;
use crate::model::guide::GuideSource;

/// Default maximum source file size (4 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 4 * 1024 * 1024;

/// Limits applied while reading source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLimits {
    /// Maximum file size in bytes.
    pub max_source_bytes: u64,
}

impl Default for SourceLimits {
    fn default() -> Self {
        Self {
            max_source_bytes: env_or("MATURITY_MAX_SOURCE_BYTES", DEFAULT_MAX_SOURCE_BYTES),
        }
    }
}

/// Text format of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// YAML (`.yaml`, `.yml`, anything unrecognised)
    Yaml,
    /// JSON (`.json`)
    Json,
}

impl SourceFormat {
    /// Pick the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read a source file as text.
///
/// # Errors
///
/// Returns `SourceError::MissingFile` if the path does not exist,
/// `SourceError::TooLarge` if it exceeds `limits`, `SourceError::Read` on
/// I/O failure (including invalid UTF-8) and `SourceError::Empty` if the
/// file holds only whitespace.
pub fn read_source(path: &Path, limits: SourceLimits) -> Result<String, SourceError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            read_error(path, e)
        }
    })?;

    if metadata.len() > limits.max_source_bytes {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: limits.max_source_bytes,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    if text.trim().is_empty() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Deserialize source text in the given format.
///
/// `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `SourceError::ParseError` if the text is not valid for `T`.
pub fn parse_str<T: DeserializeOwned>(
    text: &str,
    path: &Path,
    format: SourceFormat,
) -> Result<T, SourceError> {
    match format {
        SourceFormat::Yaml => serde_yaml::from_str(text).map_err(|e| SourceError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        }),
        SourceFormat::Json => serde_json::from_str(text).map_err(|e| SourceError::ParseError {
            path: path.to_path_buf(),
            line: Some(e.line()).filter(|&l| l > 0),
            message: e.to_string(),
        }),
    }
}

/// Read and deserialize a source file, choosing the parser by extension.
///
/// # Errors
///
/// Returns any error from [`read_source`] or [`parse_str`].
pub fn load<T: DeserializeOwned>(path: &Path, limits: SourceLimits) -> Result<T, SourceError> {
    let text = read_source(path, limits)?;
    parse_str(&text, path, SourceFormat::from_path(path))
}

/// Load the model store.
///
/// # Errors
///
/// Returns `SourceError` if the file is missing, unreadable or malformed.
pub fn load_model(path: &Path, limits: SourceLimits) -> Result<MaturityModel, SourceError> {
    load(path, limits)
}

/// Load the guide overlay store.
///
/// # Errors
///
/// Returns `SourceError` if the file is missing, unreadable or malformed,
/// including any unknown field in a guide record.
pub fn load_guide(path: &Path, limits: SourceLimits) -> Result<GuideSource, SourceError> {
    load(path, limits)
}

fn read_error(path: &Path, source: std::io::Error) -> SourceError {
    SourceError::Read {
        path: PathBuf::from(path),
        source,
    }
}

/// Read an environment variable, falling back to `default` if unset or
/// unparseable.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_YAML: &str = r"
levels:
  - id: level1
    name: 'Level 1: Foundational Practices'
    practices:
      - id: p1
        name: Daily Standup
        criteria: [Happens daily, Is time-boxed]
";

    #[test]
    fn test_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("a.JSON")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("a.yaml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.yml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a")), SourceFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml_model() {
        let model: MaturityModel =
            parse_str(MODEL_YAML, Path::new("model.yaml"), SourceFormat::Yaml).unwrap();
        assert_eq!(model.levels[0].practices[0].criteria.len(), 2);
    }

    #[test]
    fn test_parse_error_carries_line() {
        let err = parse_str::<MaturityModel>(
            "levels:\n  - id: [unclosed\n",
            Path::new("model.yaml"),
            SourceFormat::Yaml,
        )
        .unwrap_err();
        match err {
            SourceError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_model() {
        let json = r#"{"levels":[{"id":"level1","name":"Level 1: A","practices":[]}]}"#;
        let model: MaturityModel =
            parse_str(json, Path::new("model.json"), SourceFormat::Json).unwrap();
        assert_eq!(model.levels.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_model(
            Path::new("/nonexistent/maturity/model.yaml"),
            SourceLimits::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::MissingFile { .. }));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.yaml");
        std::fs::write(&path, "  \n\n").unwrap();
        let err = load_model(&path, SourceLimits::default()).unwrap_err();
        assert!(matches!(err, SourceError::Empty { .. }));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.yaml");
        std::fs::write(&path, MODEL_YAML).unwrap();
        let limits = SourceLimits {
            max_source_bytes: 16,
        };
        let err = load_model(&path, limits).unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { limit: 16, .. }));
    }

    #[test]
    fn test_load_guide_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.yaml");
        std::fs::write(
            &path,
            "levels:\n  - readyWhen: []\n    quickWins: []\n    pitfalls: []\n    successLooks: []\n    nextLevel: []\n    startHere: { title: Go }\n",
        )
        .unwrap();
        let guide = load_guide(&path, SourceLimits::default()).unwrap();
        assert_eq!(guide.levels[0].start_here.title, "Go");
    }

    #[test]
    fn test_env_or_fallback() {
        assert_eq!(env_or("MATURITY_TEST_UNSET_VARIABLE_XYZ", 7_u64), 7);
    }
}
