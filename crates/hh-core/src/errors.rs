//! Error types for the hellenic-holidays workspace.
//!
//! The library performs only pure calendrical arithmetic, so the surface
//! here is small: constructing a date outside the supported range, or a
//! malformed argument at the boundary, is everything that can go wrong.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;
