//! # hh-core
//!
//! Error types shared across the hellenic-holidays workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the shared `Result` alias.
pub mod errors;

pub use errors::{Error, Result};
