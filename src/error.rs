//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Free-text time parsing never produces an error; these variants cover
//! configuration loading, incomplete rate tables and invalid pay periods.

use thiserror::Error;

/// The main error type for the timesheet engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::MissingRate {
///     name: "ordinary_hours".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing rate: ordinary_hours");
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

    /// A rate required by the calculation is absent from the rate table.
    #[error("Missing rate: {name}")]
    MissingRate {
        /// The name of the missing rate entry.
        name: String,
    },

    /// One of the three base rates was rejected.
    #[error("Invalid base rate '{field}': {message}")]
    InvalidBaseRate {
        /// The base rate field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The set of day entries does not form a valid pay period.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the pay period invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
