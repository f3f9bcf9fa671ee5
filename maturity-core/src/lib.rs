//! Maturity Core: schema, source loading and derivation
//!
//! This crate owns the maturity model types, the guide overlay types, the
//! YAML/JSON source loader and the derivation engine that produces the
//! practice index and merged guide view. It is shared by `maturity-html`
//! (page rendering) and `maturity` (CLI).

pub mod convert;
pub mod derive;
pub mod error;
pub mod model;
pub mod source;
pub mod validate;
