//! Rendering error types.

use thiserror::Error;

/// Errors raised while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page's input document did not match its schema
    #[error("invalid {page} data: {source}")]
    Data {
        /// Page being rendered
        page: &'static str,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// The page's data could not be embedded as JSON
    #[error("failed to embed {page} data: {source}")]
    Embed {
        /// Page being rendered
        page: &'static str,
        /// Serialization failure
        #[source]
        source: serde_json::Error,
    },
}

impl RenderError {
    /// Name of the page that failed.
    #[must_use]
    pub const fn page(&self) -> &'static str {
        match self {
            Self::Data { page, .. } | Self::Embed { page, .. } => page,
        }
    }
}
