//! Execution strategies for reductions

use crate::error::Result;
use std::fmt;
use std::time::Duration;
use tally_core::SequenceReducer;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded sharded processing
    Parallel,
    /// Pick sequential or parallel from the input size
    Adaptive,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        };
        f.write_str(name)
    }
}

/// What an executor did to produce a result
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionMetrics {
    /// The mode that actually ran (never `Adaptive`)
    pub mode_used: ExecutionMode,
    /// Elements folded into the result
    pub elements_processed: usize,
    /// Shards the input was split into (1 for sequential runs)
    pub shards_processed: usize,
    /// Wall-clock time spent reducing
    pub processing_time: Duration,
}

/// A finished reduction and its metrics
#[derive(Debug, Clone)]
pub struct ExecutionOutput<V> {
    /// The finished result
    pub value: V,
    /// How it was produced
    pub metrics: ExecutionMetrics,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Reduce `elements` with `reducer`, consuming every element exactly once
    fn execute<T, R>(&self, reducer: &R, elements: Vec<T>) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on input size
pub fn auto_select(len: usize, threshold: usize) -> ExecutionMode {
    if cfg!(feature = "parallel") && len >= threshold {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    }
}
