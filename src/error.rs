//! Error types for lattice-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lattice-raster operations.
///
/// Line rasterization has no failure mode; every variant here belongs to circle
/// input validation, argument parsing or configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// Circle radius is not a positive integer.
    #[error("radius must be a positive integer, got {radius}")]
    InvalidRadius {
        /// Rejected radius value.
        radius: i64,
    },

    /// Text could not be read as a number at all.
    #[error("not a number: '{0}'")]
    InvalidNumber(String),

    /// Text is numeric but not integer-valued (e.g. `2.5`).
    #[error("not an integer: '{0}'")]
    NotAnInteger(String),

    /// Integer does not fit the coordinate range.
    #[error("out of range: '{0}'")]
    OutOfRange(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error (terminal output, config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
