//! Pipeline configuration
//!
//! Directory layout and the fixed file names each step reads and writes.

use std::path::{Path, PathBuf};

use maturity_core::source::SourceLimits;
use maturity_html::Page;

use crate::cli::args::DirArgs;

/// Authored model source.
pub const MODEL_SOURCE: &str = "model.yaml";
/// Authored guide overlay source.
pub const GUIDE_SOURCE: &str = "guide.yaml";
/// Converted model store.
pub const MODEL_JSON: &str = "model.json";
/// Converted guide overlay store.
pub const GUIDE_SOURCE_JSON: &str = "guide-source.json";
/// Derived flattened practice index.
pub const ASSESSMENT_JSON: &str = "assessment.json";
/// Derived merged guide view.
pub const GUIDE_JSON: &str = "guide.json";

/// Where the pipeline reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the YAML sources.
    pub source_dir: PathBuf,
    /// Directory for converted and derived JSON.
    pub build_dir: PathBuf,
    /// Directory for rendered pages.
    pub public_dir: PathBuf,
    /// Size limit for every file the pipeline reads.
    pub limits: SourceLimits,
}

impl PipelineConfig {
    /// Create a configuration with default source limits.
    #[must_use]
    pub fn new(
        source_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            build_dir: build_dir.into(),
            public_dir: public_dir.into(),
            limits: SourceLimits::default(),
        }
    }

    /// `<source>/model.yaml`
    #[must_use]
    pub fn model_source(&self) -> PathBuf {
        self.source_dir.join(MODEL_SOURCE)
    }

    /// `<source>/guide.yaml`
    #[must_use]
    pub fn guide_source(&self) -> PathBuf {
        self.source_dir.join(GUIDE_SOURCE)
    }

    /// `<build>/model.json`
    #[must_use]
    pub fn model_json(&self) -> PathBuf {
        self.build_dir.join(MODEL_JSON)
    }

    /// `<build>/guide-source.json`
    #[must_use]
    pub fn guide_source_json(&self) -> PathBuf {
        self.build_dir.join(GUIDE_SOURCE_JSON)
    }

    /// `<build>/assessment.json`
    #[must_use]
    pub fn assessment_json(&self) -> PathBuf {
        self.build_dir.join(ASSESSMENT_JSON)
    }

    /// `<build>/guide.json`
    #[must_use]
    pub fn guide_json(&self) -> PathBuf {
        self.build_dir.join(GUIDE_JSON)
    }

    /// The build-directory document a page is rendered from.
    #[must_use]
    pub fn page_input(&self, page: Page) -> PathBuf {
        self.build_dir.join(page.data_file())
    }

    /// The public-directory file a page is written to.
    #[must_use]
    pub fn page_output(&self, page: Page) -> PathBuf {
        self.public_dir.join(page.output_file())
    }

    /// Source/converted pairs for the convert step.
    #[must_use]
    pub fn conversions(&self) -> [(PathBuf, PathBuf); 2] {
        [
            (self.model_source(), self.model_json()),
            (self.guide_source(), self.guide_source_json()),
        ]
    }
}

impl From<&DirArgs> for PipelineConfig {
    fn from(args: &DirArgs) -> Self {
        Self::new(&args.source_dir, &args.build_dir, &args.public_dir)
    }
}

/// File name component of a path, for progress lines.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layout() {
        let config = PipelineConfig::new("src", "build", "public");
        assert_eq!(config.model_source(), Path::new("src/model.yaml"));
        assert_eq!(config.guide_source(), Path::new("src/guide.yaml"));
        assert_eq!(config.model_json(), Path::new("build/model.json"));
        assert_eq!(config.guide_source_json(), Path::new("build/guide-source.json"));
        assert_eq!(config.assessment_json(), Path::new("build/assessment.json"));
        assert_eq!(config.guide_json(), Path::new("build/guide.json"));
    }

    #[test]
    fn test_page_paths() {
        let config = PipelineConfig::new("src", "out/build", "out/public");
        assert_eq!(
            config.page_input(Page::Assessment),
            Path::new("out/build/assessment.json")
        );
        assert_eq!(config.page_output(Page::Guide), Path::new("out/public/guide.html"));
    }

    #[test]
    fn test_from_dir_args() {
        let args = DirArgs {
            source_dir: PathBuf::from("content"),
            build_dir: PathBuf::from("tmp"),
            public_dir: PathBuf::from("site"),
        };
        let config = PipelineConfig::from(&args);
        assert_eq!(config.source_dir, Path::new("content"));
        assert_eq!(config.public_dir, Path::new("site"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("build/guide-source.json")), "guide-source.json");
    }
}
