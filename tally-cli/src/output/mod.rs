//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use tally_api::reducers::SummaryStatistics;
use tally_api::Metadata;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input file
    fn write_report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Result of reducing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input path as given
    pub file: String,
    /// Name of the reducer that ran
    pub reducer: String,
    /// Finished value
    pub value: ReducedValue,
    /// Processing metadata, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Finished value of a reduction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReducedValue {
    /// Rebuilt text
    Text(String),
    /// Number of elements
    Count(u64),
    /// Integer sum
    Sum(i64),
    /// Summary statistics
    Stats(StatsSummary),
}

impl fmt::Display for ReducedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReducedValue::Text(text) => f.write_str(text),
            ReducedValue::Count(count) => write!(f, "{count}"),
            ReducedValue::Sum(sum) => write!(f, "{sum}"),
            ReducedValue::Stats(stats) => write!(f, "{stats}"),
        }
    }
}

/// Flattened summary statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Number of values
    pub count: u64,
    /// Sum of values
    pub sum: i128,
    /// Smallest value
    pub min: Option<i64>,
    /// Largest value
    pub max: Option<i64>,
    /// Arithmetic mean
    pub average: Option<f64>,
}

impl From<SummaryStatistics> for StatsSummary {
    fn from(stats: SummaryStatistics) -> Self {
        Self {
            count: stats.count(),
            sum: stats.sum(),
            min: stats.min().into_option(),
            max: stats.max().into_option(),
            average: stats.average().into_option(),
        }
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={} sum={}", self.count, self.sum)?;
        if let (Some(min), Some(max), Some(average)) = (self.min, self.max, self.average) {
            write!(f, " min={min} max={max} average={average:.2}")?;
        }
        Ok(())
    }
}
