//! Public API for Tally reductions
//!
//! This crate provides a stable interface for running sequence reducers
//! through the engine, plus the small collection, callback, shape and
//! calendar utilities built on top of them.
//!
//! ```
//! use tally_api::reducers::CharToString;
//!
//! let text = tally_api::collect(&CharToString, "Hello".chars()).unwrap();
//! assert_eq!(text, "Hello");
//! ```

#![warn(missing_docs)]

pub mod calendar;
pub mod callbacks;
pub mod config;
pub mod dto;
pub mod error;
pub mod records;
pub mod shapes;

use error::Result;
use tally_engine::ReduceProcessor;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Collected, Metadata};
pub use error::ApiError;
pub use tally_core::{reducers, Maybe, MissingValue, SequenceReducer};
pub use tally_engine::ExecutionMode;

/// Main entry point for running reductions
///
/// Wraps an engine processor so callers never deal with engine types.
#[derive(Debug, Clone)]
pub struct Collector {
    inner: ReduceProcessor,
    config: Config,
}

impl Collector {
    /// Create a new collector with default configuration (adaptive mode)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new collector with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = ReduceProcessor::with_config(config.inner.clone())?;
        Ok(Self { inner, config })
    }

    /// Reduce `items` and return the finished value
    pub fn collect<T, R, I>(&self, reducer: &R, items: I) -> Result<R::Output>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        Ok(self.inner.reduce_value(reducer, items)?)
    }

    /// Reduce `items` and return the value with processing metadata
    pub fn collect_with_metadata<T, R, I>(
        &self,
        reducer: &R,
        items: I,
    ) -> Result<Collected<R::Output>>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        let output = self.inner.reduce(reducer, items)?;
        Ok(Collected {
            value: output.value,
            metadata: Metadata::from_engine(output.metadata, self.inner.thread_count()),
        })
    }

    /// Reduce with an explicit execution mode
    pub fn collect_with_mode<T, R, I>(
        &self,
        reducer: &R,
        items: I,
        mode: ExecutionMode,
    ) -> Result<R::Output>
    where
        T: Send,
        R: SequenceReducer<T>,
        I: IntoIterator<Item = T>,
    {
        Ok(self.inner.reduce_with_mode(reducer, items, mode)?.value)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Reduce `items` with a default collector
pub fn collect<T, R, I>(reducer: &R, items: I) -> Result<R::Output>
where
    T: Send,
    R: SequenceReducer<T>,
    I: IntoIterator<Item = T>,
{
    Collector::new()?.collect(reducer, items)
}

/// Fold characters into a string
pub fn chars_to_string<I>(chars: I) -> Result<String>
where
    I: IntoIterator<Item = char>,
{
    collect(&reducers::CharToString, chars)
}
