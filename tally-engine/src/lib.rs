//! Execution orchestration for sequence reductions
//!
//! This crate provides execution strategies, input sharding, and the
//! processor that runs [`tally_core::SequenceReducer`]s sequentially or
//! across a rayon thread pool.

#![warn(missing_docs)]

pub mod adaptive_dispatcher;
pub mod config;
pub mod error;
pub mod executor;
pub mod processor;
pub mod sharder;

// Re-export key types
pub use adaptive_dispatcher::AdaptiveDispatcher;
pub use config::{EngineConfig, ShardPolicy};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMetrics, ExecutionMode, ExecutionOutput, Executor};
pub use processor::{Output, ProcessingMetadata, ReduceProcessor, ReduceProcessorBuilder};
pub use sharder::{Shard, Sharder};

// Re-export from core for convenience
pub use tally_core::{reducers, CoreError, Maybe, Reduction, SequenceReducer};
