//! Error types for the unit conversion engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine and its server.

use thiserror::Error;

/// The main error type for the unit conversion engine.
///
/// All operations in the engine and the surrounding server return this error
/// type, making it easy to handle errors consistently throughout the
/// application.
///
/// # Example
///
/// ```
/// use unit_converter::error::EngineError;
///
/// let error = EngineError::UnsupportedConversion {
///     from: "celsius".to_string(),
///     to: "meters".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "conversion from 'celsius' to 'meters' is not supported"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested conversion has no entry in the conversion table.
    ///
    /// Raised for an unknown category, a unit that does not belong to the
    /// requested category, or a direction that is not defined. Never raised
    /// when the source and target units are equal.
    #[error("conversion from '{from}' to '{to}' is not supported")]
    UnsupportedConversion {
        /// The source unit token that could not be resolved.
        from: String,
        /// The target unit token that could not be resolved.
        to: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::UnsupportedConversion`] for a from/to pair.
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        EngineError::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
