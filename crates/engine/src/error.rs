//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`PlateAlreadyParked`] thrown when admitting a plate that is already parked.
//! - [`PlateNotFound`] thrown when releasing a plate that is not parked.
//!
//!  [`PlateAlreadyParked`]: EngineError::PlateAlreadyParked
//!  [`PlateNotFound`]: EngineError::PlateNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid plate: {0}")]
    InvalidPlate(String),
    #[error("\"{0}\" is already parked!")]
    PlateAlreadyParked(String),
    #[error("\"{0}\" is not parked here!")]
    PlateNotFound(String),
    #[error("Invalid hours: {0}")]
    InvalidHours(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
