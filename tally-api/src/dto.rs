//! Data Transfer Objects for API

use tally_engine::{ExecutionMode, ProcessingMetadata};

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Elements reduced
    pub elements_processed: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Throughput in elements per second
    pub elements_per_second: f64,
    /// Execution mode used
    pub mode_used: String,
    /// Number of threads used
    pub thread_count: usize,
    /// Number of shards (if more than one)
    pub shards: Option<usize>,
}

impl Metadata {
    pub(crate) fn from_engine(metadata: ProcessingMetadata, pool_threads: usize) -> Self {
        let thread_count = match metadata.execution_mode {
            ExecutionMode::Parallel => pool_threads,
            _ => 1,
        };

        Self {
            elements_processed: metadata.elements_processed,
            processing_time_ms: metadata.processing_time_ms,
            elements_per_second: metadata.elements_per_second,
            mode_used: metadata.execution_mode.to_string(),
            thread_count,
            shards: metadata.shards_processed,
        }
    }
}

/// A reduction result together with how it was produced
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Collected<V> {
    /// The finished reduction result
    pub value: V,
    /// Processing metadata
    pub metadata: Metadata,
}
