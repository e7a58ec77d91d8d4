//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMetrics, ExecutionMode, ExecutionOutput, Executor},
};
use std::time::Instant;
use tally_core::{Reduction, SequenceReducer};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute<T, R>(&self, reducer: &R, elements: Vec<T>) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        let start_time = Instant::now();

        let reduction = Reduction::new(reducer).extend(elements)?;
        let elements_processed = reduction.consumed();
        let value = reduction.finish()?;

        Ok(ExecutionOutput {
            value,
            metrics: ExecutionMetrics {
                mode_used: ExecutionMode::Sequential,
                elements_processed,
                shards_processed: usize::from(elements_processed > 0),
                processing_time: start_time.elapsed(),
            },
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
