//! Error types shared by the converters, the value parser and the settings loader.

use thiserror::Error;

/// Errors returned by the fractionalize filters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FractionalizeError {
    /// The value lies outside the domain of the requested conversion
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The continued fraction did not reach the tolerance within the iteration cap
    #[error("approximation did not converge after {iterations} iterations")]
    NonTerminating { iterations: usize },

    /// A partial quotient or convergent no longer fits a 64-bit integer
    #[error("convergent overflowed after {iterations} iterations")]
    ConvergentOverflow { iterations: usize },

    /// The settings could not be parsed or failed validation
    #[error("invalid settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, FractionalizeError>;
