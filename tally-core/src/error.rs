//! Error types for the reduction core

use thiserror::Error;

/// Errors raised while folding a sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An element could not be incorporated into the accumulator.
    ///
    /// The reduction that raised it is abandoned; no partial result is finished.
    #[error("element {index} could not be processed: {reason}")]
    ElementProcessing {
        /// Position of the failing element in the original sequence
        index: usize,
        /// Why the element was rejected
        reason: String,
    },

    /// A reducer that has no identity value was finished with zero elements
    #[error("reducer '{reducer}' cannot finish an empty reduction")]
    EmptyAccumulatorFinish {
        /// Name of the reducer that refused to finish
        reducer: &'static str,
    },

    /// The finished value does not fit the reducer's output type
    #[error("reducer '{reducer}' overflowed its output type")]
    Overflow {
        /// Name of the reducer whose result overflowed
        reducer: &'static str,
    },
}

impl CoreError {
    /// Build an element processing error for an element whose position is
    /// not yet known. [`Reduction`](crate::Reduction) fills in the index.
    pub fn element(reason: impl Into<String>) -> Self {
        CoreError::ElementProcessing {
            index: 0,
            reason: reason.into(),
        }
    }

    /// Re-anchor an element processing error at the given position.
    ///
    /// Other variants are returned unchanged.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            CoreError::ElementProcessing { reason, .. } => CoreError::ElementProcessing {
                index: position,
                reason,
            },
            other => other,
        }
    }

    /// True for [`CoreError::ElementProcessing`]
    pub fn is_element_error(&self) -> bool {
        matches!(self, CoreError::ElementProcessing { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
