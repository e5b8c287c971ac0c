//! Error types for kinetic evaluation.

use thiserror::Error;

/// Errors encountered while evaluating the hydrolysis model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Core error: {0}")]
    Core(#[from] ah_core::AhError),
}

pub type KineticsResult<T> = Result<T, KineticsError>;
