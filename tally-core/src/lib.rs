//! Order-preserving sequence reducers
//!
//! The central abstraction is [`SequenceReducer`]: a fold described by four
//! operations (supply, accumulate, merge, finish) that can run over a whole
//! sequence or over contiguous shards whose partial results are merged back
//! in order. [`Reduction`] tracks one in-flight accumulator.
//!
//! ```
//! use tally_core::{reduce_all, reducers::CharToString, Reduction};
//!
//! assert_eq!(reduce_all(&CharToString, "Hello".chars()).unwrap(), "Hello");
//!
//! let left = Reduction::new(&CharToString).extend(['H', 'e']).unwrap();
//! let right = Reduction::starting_at(&CharToString, 2).extend(['l', 'l', 'o']).unwrap();
//! assert_eq!(left.merge(right).finish().unwrap(), "Hello");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod maybe;
pub mod monoid;
pub mod reducer;
pub mod reducers;

// Re-export key types
pub use error::{CoreError, Result};
pub use maybe::{Maybe, MissingValue};
pub use monoid::{tree_merge, Monoid, MonoidReduce, MonoidReducer};
pub use reducer::{reduce_all, Reduction, SequenceReducer};
