//! Parallel execution strategy
//!
//! Runs in three phases:
//! 1. split the input into contiguous, owned shards
//! 2. fold every shard into its own accumulator on the rayon pool
//! 3. merge the shard accumulators pairwise in order, then finish once

use crate::{
    config::ShardPolicy,
    error::{EngineError, Result},
    executor::{ExecutionMetrics, ExecutionMode, ExecutionOutput, Executor},
    sharder::{Shard, Sharder},
};
use rayon::prelude::*;
use std::time::Instant;
use tally_core::{tree_merge, Reduction, SequenceReducer};

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    sharder: Sharder,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor running on the global rayon pool
    pub fn new(shard_policy: ShardPolicy) -> Self {
        Self {
            sharder: Sharder::new(shard_policy),
            pool: None,
        }
    }

    /// Create a parallel executor with a dedicated pool of `threads` workers.
    ///
    /// `None` uses the global rayon pool.
    pub fn with_threads(shard_policy: ShardPolicy, threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            sharder: Sharder::new(shard_policy),
            pool,
        })
    }

    /// Number of worker threads reductions will run on
    pub fn thread_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Fold each shard into its own reduction, preserving shard order
    fn accumulate_shards<'r, T, R>(
        &self,
        reducer: &'r R,
        shards: Vec<Shard<T>>,
    ) -> Result<Vec<Reduction<'r, T, R>>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        let fold = move || {
            shards
                .into_par_iter()
                .map(|shard| Reduction::starting_at(reducer, shard.offset).extend(shard.items))
                .collect::<tally_core::Result<Vec<_>>>()
        };

        let partials = match &self.pool {
            Some(pool) => pool.install(fold),
            None => fold(),
        };

        Ok(partials?)
    }
}

impl Executor for ParallelExecutor {
    fn execute<T, R>(&self, reducer: &R, elements: Vec<T>) -> Result<ExecutionOutput<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
    {
        let start_time = Instant::now();
        let total = elements.len();

        // Phase 1: Shard the input
        let shards = self.sharder.split_owned(elements)?;
        let shards_processed = shards.len();
        log::debug!(
            "reducing {} elements with '{}' across {} shards on {} threads",
            total,
            reducer.name(),
            shards_processed,
            self.thread_count()
        );

        // Phase 2: Accumulate shards in parallel
        let partials = self.accumulate_shards(reducer, shards)?;

        // Phase 3: Merge in order and finish once
        let reduction = tree_merge(partials, |left, right| left.merge(right))
            .unwrap_or_else(|| Reduction::new(reducer));
        debug_assert_eq!(reduction.consumed(), total);

        let elements_processed = reduction.consumed();
        let value = reduction.finish()?;

        Ok(ExecutionOutput {
            value,
            metrics: ExecutionMetrics {
                mode_used: ExecutionMode::Parallel,
                elements_processed,
                shards_processed,
                processing_time: start_time.elapsed(),
            },
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
