//! Error types for the PAYE engine.
//!
//! The calculation functions themselves are total and never fail. Errors only
//! arise while loading a statutory registry or checking a configuration
//! override supplied by a caller.

use thiserror::Error;

use crate::models::Currency;

/// The main error type for the PAYE engine.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/registry.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/registry.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A bracket table does not cover `[0, inf)` with ascending, contiguous brackets.
    #[error("Invalid {currency} tax table: {message}")]
    InvalidTaxTable {
        /// The currency whose table is malformed.
        currency: Currency,
        /// A description of the problem.
        message: String,
    },

    /// A configuration override carried an out-of-range value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
