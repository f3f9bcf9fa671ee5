//! `maturity`: static site builder for the product management maturity model
//!
//! Converts the authored YAML sources to JSON, derives the assessment and
//! guide views, and renders the three HTML pages.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod pipeline;
