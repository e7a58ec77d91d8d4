//! Main reduction processor and builder

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    config::{EngineConfig, ShardPolicy},
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode},
};
use std::sync::Arc;
use tally_core::SequenceReducer;

/// Main reduction processor
///
/// Entry point for running reducers over in-memory sequences. Cloning is
/// cheap; clones share the same executors and thread pool.
#[derive(Debug, Clone)]
pub struct ReduceProcessor {
    dispatcher: Arc<AdaptiveDispatcher>,
}

/// Rich output with metadata
#[derive(Debug, Clone)]
pub struct Output<V> {
    /// The finished reduction result
    pub value: V,
    /// Processing metadata and performance metrics
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Total elements reduced
    pub elements_processed: usize,
    /// Number of shards processed (if more than one)
    pub shards_processed: Option<usize>,
    /// Throughput in elements per second
    pub elements_per_second: f64,
}

impl From<ExecutionMetrics> for ProcessingMetadata {
    fn from(metrics: ExecutionMetrics) -> Self {
        let seconds = metrics.processing_time.as_secs_f64();
        Self {
            execution_mode: metrics.mode_used,
            processing_time_ms: seconds * 1000.0,
            elements_processed: metrics.elements_processed,
            shards_processed: if metrics.shards_processed > 1 {
                Some(metrics.shards_processed)
            } else {
                None
            },
            elements_per_second: if seconds > 0.0 {
                metrics.elements_processed as f64 / seconds
            } else {
                0.0
            },
        }
    }
}

impl ReduceProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let dispatcher = Arc::new(AdaptiveDispatcher::new(config)?);
        Ok(Self { dispatcher })
    }

    /// Start building a processor
    pub fn builder() -> ReduceProcessorBuilder {
        ReduceProcessorBuilder::new()
    }

    /// The configuration in effect
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Worker threads available to parallel reductions
    pub fn thread_count(&self) -> usize {
        self.dispatcher.thread_count()
    }

    /// Reduce `elements` with the configured execution mode and return rich output
    pub fn reduce<T, R, I>(&self, reducer: &R, elements: I) -> Result<Output<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        let output = self
            .dispatcher
            .execute_configured(reducer, elements.into_iter().collect())?;

        Ok(Output {
            value: output.value,
            metadata: output.metrics.into(),
        })
    }

    /// Reduce `elements` with a specific execution mode
    pub fn reduce_with_mode<T, R, I>(
        &self,
        reducer: &R,
        elements: I,
        mode: ExecutionMode,
    ) -> Result<Output<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        let output =
            self.dispatcher
                .execute_with_mode(reducer, elements.into_iter().collect(), mode)?;

        Ok(Output {
            value: output.value,
            metadata: output.metrics.into(),
        })
    }

    /// Reduce and return only the finished value (convenience method)
    pub fn reduce_value<T, R, I>(&self, reducer: &R, elements: I) -> Result<R::Output>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        Ok(self.reduce(reducer, elements)?.value)
    }
}

/// Builder for ReduceProcessor
///
/// Provides a fluent interface for configuring the processor.
#[derive(Debug, Clone)]
pub struct ReduceProcessorBuilder {
    config: EngineConfig,
}

impl Default for ReduceProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReduceProcessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Use fixed-size shards of `size` elements
    pub fn shard_size(mut self, size: usize) -> Self {
        self.config.shard_policy = ShardPolicy::Fixed { size };
        self
    }

    /// Split inputs into roughly `count` shards
    pub fn target_shards(mut self, count: usize) -> Self {
        self.config.shard_policy = ShardPolicy::Auto {
            target_shards: count,
        };
        self
    }

    /// Set the minimum element count for parallel execution
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Use sequential configuration preset
    pub fn sequential(mut self) -> Self {
        self.config = EngineConfig::sequential();
        self
    }

    /// Use fast configuration preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Use balanced configuration preset
    pub fn balanced(mut self) -> Self {
        self.config = EngineConfig::balanced();
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<ReduceProcessor> {
        ReduceProcessor::with_config(self.config)
    }
}
