//! Adaptive execution dispatcher
//!
//! Automatically selects the execution mode based on the number of elements
//! being reduced.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, ExecutionOutput, Executor, SequentialExecutor},
};
use tally_core::SequenceReducer;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
///
/// Selects between sequential and parallel execution by comparing the input
/// length against the configured parallel threshold.
#[derive(Debug)]
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        // a sequential configuration never needs its own pool
        #[cfg(feature = "parallel")]
        let pool_threads = match config.execution_mode {
            ExecutionMode::Sequential => None,
            _ => config.threads,
        };

        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::with_threads(config.shard_policy, pool_threads)?,
            config,
        })
    }

    /// The configuration this dispatcher was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Worker threads available to reductions in the configured mode
    pub fn thread_count(&self) -> usize {
        if self.config.execution_mode == ExecutionMode::Sequential {
            return 1;
        }

        #[cfg(feature = "parallel")]
        return self.parallel_executor.thread_count();

        #[cfg(not(feature = "parallel"))]
        1
    }

    /// Select the execution mode for an input of `len` elements
    pub fn select_mode(&self, len: usize) -> ExecutionMode {
        let mode = auto_select(len, self.config.parallel_threshold);
        log::debug!(
            "selected {} execution for {} elements (threshold {})",
            mode,
            len,
            self.config.parallel_threshold
        );
        mode
    }

    /// Reduce with the configured execution mode
    pub fn execute_configured<T, R>(
        &self,
        reducer: &R,
        elements: Vec<T>,
    ) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        self.execute_with_mode(reducer, elements, self.config.execution_mode)
    }

    /// Reduce with the specified execution mode
    pub fn execute_with_mode<T, R>(
        &self,
        reducer: &R,
        elements: Vec<T>,
        mode: ExecutionMode,
    ) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        match mode {
            ExecutionMode::Sequential => self.sequential_executor.execute(reducer, elements),
            ExecutionMode::Adaptive => {
                let selected_mode = self.select_mode(elements.len());
                self.execute_with_mode(reducer, elements, selected_mode)
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel_executor.execute(reducer, elements),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::debug!("parallel feature disabled, reducing sequentially");
                self.sequential_executor.execute(reducer, elements)
            }
        }
    }
}

impl Executor for AdaptiveDispatcher {
    fn execute<T, R>(&self, reducer: &R, elements: Vec<T>) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        self.execute_with_mode(reducer, elements, ExecutionMode::Adaptive)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Adaptive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShardPolicy;
    use crate::error::EngineError;
    use tally_core::reducers::CharToString;

    fn dispatcher(threshold: usize) -> AdaptiveDispatcher {
        AdaptiveDispatcher::new(EngineConfig {
            parallel_threshold: threshold,
            shard_policy: ShardPolicy::Fixed { size: 2 },
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_small_input_runs_sequentially() {
        let output = dispatcher(100)
            .execute(&CharToString, "abc".chars().collect())
            .unwrap();
        assert_eq!(output.value, "abc");
        assert_eq!(output.metrics.mode_used, ExecutionMode::Sequential);
    }

    #[test]
    fn test_sequential_config_builds_no_pool() {
        let dispatcher = AdaptiveDispatcher::new(EngineConfig {
            threads: Some(3),
            ..EngineConfig::sequential()
        })
        .unwrap();

        assert_eq!(dispatcher.thread_count(), 1);
        #[cfg(feature = "parallel")]
        assert_eq!(
            dispatcher.parallel_executor.thread_count(),
            rayon::current_num_threads()
        );

        let output = dispatcher
            .execute(&CharToString, "abc".chars().collect())
            .unwrap();
        assert_eq!(output.value, "abc");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_large_input_runs_in_parallel() {
        let output = dispatcher(3)
            .execute(&CharToString, "Hello".chars().collect())
            .unwrap();
        assert_eq!(output.value, "Hello");
        assert_eq!(output.metrics.mode_used, ExecutionMode::Parallel);
        assert_eq!(output.metrics.shards_processed, 3);
    }

    #[test]
    fn test_explicit_mode_overrides_threshold() {
        let output = dispatcher(0)
            .execute_with_mode(&CharToString, vec!['o', 'k'], ExecutionMode::Sequential)
            .unwrap();
        assert_eq!(output.metrics.mode_used, ExecutionMode::Sequential);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = AdaptiveDispatcher::new(EngineConfig {
            threads: Some(0),
            ..EngineConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }
}
