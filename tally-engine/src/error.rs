//! Layered error types
//!
//! Engine errors wrap core reduction errors and add the failures that only
//! exist once work is sharded and scheduled.

use tally_core::CoreError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core reduction error
    #[error("reduction failed: {0}")]
    Core(#[from] CoreError),

    /// A shard policy that would produce empty shards
    #[error("invalid shard size {size}: shards must hold at least one element")]
    InvalidShardSize {
        /// The rejected shard size
        size: usize,
    },

    /// The dedicated thread pool could not be created
    #[cfg(feature = "parallel")]
    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// The wrapped core error, if this error came from the reduction itself
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            EngineError::Core(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::element("bad").at_index(4).into();
        assert_eq!(
            err.to_string(),
            "reduction failed: element 4 could not be processed: bad"
        );
        assert!(err.as_core().is_some_and(CoreError::is_element_error));
    }

    #[test]
    fn test_invalid_shard_size_display() {
        let err = EngineError::InvalidShardSize { size: 0 };
        assert!(err.to_string().starts_with("invalid shard size 0"));
        assert!(err.as_core().is_none());
    }
}
