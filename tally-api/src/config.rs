//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::Collector;
use tally_engine::{EngineConfig, ExecutionMode, ShardPolicy};

/// High-level configuration for running reductions
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) inner: EngineConfig,
}

impl Config {
    /// Create a configuration that always reduces on the calling thread
    pub fn sequential() -> Self {
        Self {
            inner: EngineConfig::sequential(),
        }
    }

    /// Create a fast configuration
    pub fn fast() -> Self {
        Self {
            inner: EngineConfig::fast(),
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Execution mode used for reductions
    pub fn execution_mode(&self) -> ExecutionMode {
        self.inner.execution_mode
    }

    /// Thread count for parallel reductions (`None` uses every core)
    pub fn threads(&self) -> Option<usize> {
        self.inner.threads
    }

    /// Minimum element count for parallel reduction in adaptive mode
    pub fn parallel_threshold(&self) -> usize {
        self.inner.parallel_threshold
    }

    /// The engine configuration this wraps
    pub fn engine_config(&self) -> &EngineConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Set shard size for fixed sharding
    pub fn shard_size(mut self, size: usize) -> Self {
        self.config.inner.shard_policy = ShardPolicy::Fixed { size };
        self
    }

    /// Split inputs into roughly `count` shards
    pub fn target_shards(mut self, count: usize) -> Self {
        self.config.inner.shard_policy = ShardPolicy::Auto {
            target_shards: count,
        };
        self
    }

    /// Set the adaptive parallel threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.inner.parallel_threshold = threshold;
        self
    }

    /// Use sequential configuration
    pub fn sequential(mut self) -> Self {
        self.config.inner = EngineConfig::sequential();
        self
    }

    /// Use fast configuration
    pub fn fast(mut self) -> Self {
        self.config.inner = EngineConfig::fast();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(self.config)
    }

    /// Build a collector directly
    pub fn build_collector(self) -> Result<Collector> {
        Collector::with_config(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Config::default().execution_mode(), ExecutionMode::Adaptive);
        assert_eq!(Config::sequential().threads(), None);
        assert_eq!(Config::fast().parallel_threshold(), 2_000);
        assert_eq!(
            Config::balanced().parallel_threshold(),
            Config::default().parallel_threshold()
        );
    }

    #[test]
    fn test_builder_rejects_zero_shard_size() {
        let err = Config::builder().shard_size(0).build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_builder_overrides_preset() {
        let config = Config::builder()
            .fast()
            .threads(Some(2))
            .parallel_threshold(10)
            .build()
            .unwrap();
        assert_eq!(config.threads(), Some(2));
        assert_eq!(config.parallel_threshold(), 10);
        assert_eq!(
            config.engine_config().shard_policy,
            ShardPolicy::Fixed { size: 4096 }
        );
    }
}
