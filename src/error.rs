//! Error types for the CMG simulation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise on the configuration surface: the computation pipeline
//! itself is a total function over its numeric inputs and never fails.

use thiserror::Error;

/// The main error type for the CMG simulation engine.
///
/// # Example
///
/// ```
/// use cmg_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The policy data was structurally invalid.
    #[error("Invalid policy '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
