//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Sharding policy for parallel reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardPolicy {
    /// Fixed number of elements per shard
    Fixed {
        /// Elements in each shard (the last shard may be shorter)
        size: usize,
    },
    /// Split the input into a target number of roughly equal shards
    Auto {
        /// Desired number of shards
        target_shards: usize,
    },
}

impl Default for ShardPolicy {
    fn default() -> Self {
        ShardPolicy::Auto {
            target_shards: num_cpus::get(),
        } // one shard per core
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Shard sizing policy
    pub shard_policy: ShardPolicy,
    /// Number of threads for parallel execution (None = global rayon pool)
    pub threads: Option<usize>,
    /// Minimum element count for parallel processing in adaptive mode
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            shard_policy: ShardPolicy::default(),
            threads: None,
            parallel_threshold: 10_000,
        }
    }
}

impl EngineConfig {
    /// Create a configuration that never leaves the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            shard_policy: ShardPolicy::default(),
            threads: None,
            parallel_threshold: usize::MAX, // Never use parallel
        }
    }

    /// Create a fast configuration optimized for large inputs
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            shard_policy: ShardPolicy::Fixed { size: 4096 },
            threads: None,           // Use all available
            parallel_threshold: 2_000,
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Check the configuration for values that can never work
    pub fn validate(&self) -> Result<()> {
        match self.shard_policy {
            ShardPolicy::Fixed { size: 0 } => {
                return Err(EngineError::InvalidShardSize { size: 0 });
            }
            ShardPolicy::Auto { target_shards: 0 } => {
                return Err(EngineError::ConfigError(
                    "target shard count must be at least 1".to_string(),
                ));
            }
            _ => {}
        }

        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
