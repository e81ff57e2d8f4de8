//! Error types for the render target core
//!
//! This module defines the error types used throughout the crate.
//! Resource allocation failures are not locally recoverable; they are
//! propagated so the application can abort or tear down the context.

use std::fmt;

/// Result type for render core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render core errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error from the graphics driver
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (render target or texture)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
