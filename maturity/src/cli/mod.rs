//! Command-line interface
//!
//! Argument definitions and the handlers they dispatch to.

pub mod args;
pub mod commands;
