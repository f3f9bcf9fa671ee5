//! Maturity HTML: static page rendering for the maturity model site
//!
//! Renders the model, self-assessment and getting-started guide pages as
//! standalone HTML documents. Markup is generated server-side from the typed
//! views; each page embeds its data as an inert JSON block and a small
//! script that keeps all client state in one per-document object.

pub mod error;
pub mod escape;
pub mod icons;
pub mod pages;

pub use error::RenderError;
pub use pages::{Page, PageRenderer, create_renderer};
