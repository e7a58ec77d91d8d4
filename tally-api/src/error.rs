//! API error types

use crate::calendar::CalendarError;
use crate::shapes::ShapeError;
use tally_core::CoreError;
use tally_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Reduction error raised outside the engine
    #[error("reduction error: {0}")]
    Core(#[from] CoreError),

    /// Date or time error
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Shape operation error
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// The underlying reduction error, wherever it was raised
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            ApiError::Core(err) => Some(err),
            ApiError::Engine(err) => err.as_core(),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
