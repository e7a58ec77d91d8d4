//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message()))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Reducer used when `--reducer` is not given
    pub default_reducer: String,

    /// Execution mode: adaptive, sequential or parallel
    pub execution_mode: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_reducer: "words".to_string(),
            execution_mode: "adaptive".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Minimum element count for parallel reduction in adaptive mode
    pub parallel_threshold: usize,

    /// Elements per shard (0 = one shard per core)
    pub shard_size: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
            shard_size: 0,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Worker thread count, `None` meaning every core
    pub fn threads(&self) -> Option<usize> {
        match self.worker_threads {
            0 => {
                log::debug!("Using all {} cores", num_cpus::get());
                None
            }
            n => Some(n),
        }
    }

    /// Fixed shard size, `None` meaning one shard per core
    pub fn shard_size(&self) -> Option<usize> {
        match self.shard_size {
            0 => None,
            n => Some(n),
        }
    }
}
