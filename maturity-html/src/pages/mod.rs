//! Page renderers.
//!
//! Three pages, each rendered from one JSON document in the build
//! directory:
//! - `model.html` from the model store (`model.json`)
//! - `assessment.html` from the flattened practice index (`assessment.json`)
//! - `guide.html` from the merged guide view (`guide.json`)

pub mod assessment;
pub mod guide;
pub mod layout;
pub mod model;

use serde::de::DeserializeOwned;

use crate::error::RenderError;

/// A rendered page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The maturity model with levels, practices and criteria.
    Model,
    /// The self-assessment worksheet.
    Assessment,
    /// The getting-started guide.
    Guide,
}

impl Page {
    /// Every page, in render order.
    pub const ALL: [Self; 3] = [Self::Model, Self::Assessment, Self::Guide];

    /// Short name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Assessment => "assessment",
            Self::Guide => "guide",
        }
    }

    /// Build-directory document the page is rendered from.
    #[must_use]
    pub const fn data_file(self) -> &'static str {
        match self {
            Self::Model => "model.json",
            Self::Assessment => "assessment.json",
            Self::Guide => "guide.json",
        }
    }

    /// Output file name in the public directory.
    #[must_use]
    pub const fn output_file(self) -> &'static str {
        match self {
            Self::Model => "model.html",
            Self::Assessment => "assessment.html",
            Self::Guide => "guide.html",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders one page from its JSON input document.
pub trait PageRenderer {
    /// Render the page from the text of its data file.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Data` if the document does not match the
    /// page's input schema, or `RenderError::Embed` if the data cannot be
    /// embedded.
    fn render_json(&self, json: &str) -> Result<String, RenderError>;

    /// Returns the page this renderer produces.
    fn page(&self) -> Page;
}

/// Create the renderer for a page.
#[must_use]
pub fn create_renderer(page: Page) -> Box<dyn PageRenderer> {
    match page {
        Page::Model => Box::new(model::ModelPageRenderer),
        Page::Assessment => Box::new(assessment::AssessmentPageRenderer),
        Page::Guide => Box::new(guide::GuidePageRenderer),
    }
}

/// Deserialize a page's input document.
fn parse_input<T: DeserializeOwned>(page: Page, json: &str) -> Result<T, RenderError> {
    serde_json::from_str(json).map_err(|source| RenderError::Data {
        page: page.name(),
        source,
    })
}
