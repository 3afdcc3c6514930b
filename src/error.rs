//! Error types for the calculation engine.
//!
//! The calculators themselves are total and never fail. Errors arise while
//! loading configuration, validating eligibility profiles and checking request
//! inputs against the configured limits.

use thiserror::Error;

/// The main error type for the calculation engine.
///
/// # Example
///
/// ```
/// use yojana_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
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

    /// A configuration table parsed but broke its invariants.
    #[error("Invalid configuration table '{table}': {message}")]
    InvalidConfig {
        /// The name of the offending table.
        table: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// An eligibility profile was invalid or contained inconsistent data.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A calculator input was outside the range the API accepts.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of the accepted range.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
