//! Ready-made reducer instantiations
//!
//! Every reducer documents the result it produces for an empty sequence.

pub mod adapters;
pub mod collection;
pub mod grouping;
pub mod numeric;
pub mod text;

pub use adapters::{Filtering, Mapping, NonEmpty, TryMapping};
pub use collection::{Distinct, ToVec};
pub use grouping::{GroupingBy, Partitioned, PartitioningBy};
pub use numeric::{Counting, MaxBy, MinBy, Summarizing, Summing, SummaryStatistics};
pub use text::{CharToString, Joining};
