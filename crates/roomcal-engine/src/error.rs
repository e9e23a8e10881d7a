//! Error types for engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Price overflow: {0}")]
    PriceOverflow(String),

    #[error("No interval is selected")]
    NothingSelected,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Submission failed: {0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
