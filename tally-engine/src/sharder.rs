//! Splitting input sequences into contiguous shards

use crate::{
    config::ShardPolicy,
    error::{EngineError, Result},
};
use std::ops::Range;

/// A contiguous run of elements with its position in the original sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard<T> {
    /// Index of the first element in the original sequence
    pub offset: usize,
    /// The elements, in original order
    pub items: Vec<T>,
}

impl<T> Shard<T> {
    /// Number of elements in the shard
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the shard holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits sequences according to a [`ShardPolicy`]
#[derive(Debug, Clone)]
pub struct Sharder {
    policy: ShardPolicy,
}

impl Sharder {
    /// Create a new sharder
    pub fn new(policy: ShardPolicy) -> Self {
        Self { policy }
    }

    /// The policy this sharder applies
    pub fn policy(&self) -> ShardPolicy {
        self.policy
    }

    /// Number of elements per shard for an input of `total` elements
    pub fn shard_len(&self, total: usize) -> Result<usize> {
        match self.policy {
            ShardPolicy::Fixed { size: 0 } => Err(EngineError::InvalidShardSize { size: 0 }),
            ShardPolicy::Fixed { size } => Ok(size),
            ShardPolicy::Auto { target_shards } => {
                let shard_count = target_shards.max(1);
                Ok(total.div_ceil(shard_count).max(1))
            }
        }
    }

    /// Index ranges of the shards for an input of `total` elements.
    ///
    /// Ranges are contiguous, non-empty, in order, and cover `0..total`
    /// exactly. An empty input produces no ranges.
    pub fn split(&self, total: usize) -> Result<Vec<Range<usize>>> {
        let shard_len = self.shard_len(total)?;
        let mut ranges = Vec::with_capacity(total.div_ceil(shard_len));
        let mut start = 0;

        while start < total {
            let end = (start + shard_len).min(total);
            ranges.push(start..end);
            start = end;
        }

        Ok(ranges)
    }

    /// Move `elements` into owned shards without copying them
    pub fn split_owned<T>(&self, elements: Vec<T>) -> Result<Vec<Shard<T>>> {
        let ranges = self.split(elements.len())?;
        let mut source = elements.into_iter();

        Ok(ranges
            .into_iter()
            .map(|range| Shard {
                offset: range.start,
                items: source.by_ref().take(range.len()).collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_split() {
        let sharder = Sharder::new(ShardPolicy::Fixed { size: 4 });
        let ranges = sharder.split(10).unwrap();
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_auto_split_balances_shards() {
        let sharder = Sharder::new(ShardPolicy::Auto { target_shards: 3 });
        let ranges = sharder.split(9).unwrap();
        assert_eq!(ranges, vec![0..3, 3..6, 6..9]);
    }

    #[test]
    fn test_auto_split_more_shards_than_elements() {
        let sharder = Sharder::new(ShardPolicy::Auto { target_shards: 8 });
        let ranges = sharder.split(3).unwrap();
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_empty_input_has_no_shards() {
        let sharder = Sharder::new(ShardPolicy::Fixed { size: 4 });
        assert!(sharder.split(0).unwrap().is_empty());
        assert!(sharder.split_owned(Vec::<u8>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_shard_size_is_rejected() {
        let sharder = Sharder::new(ShardPolicy::Fixed { size: 0 });
        assert!(matches!(
            sharder.split(5),
            Err(EngineError::InvalidShardSize { size: 0 })
        ));
    }

    #[test]
    fn test_split_owned_keeps_order_and_offsets() {
        let sharder = Sharder::new(ShardPolicy::Fixed { size: 2 });
        let shards = sharder.split_owned(vec!['H', 'e', 'l', 'l', 'o']).unwrap();

        assert_eq!(shards.len(), 3);
        assert_eq!(shards[0], Shard { offset: 0, items: vec!['H', 'e'] });
        assert_eq!(shards[1], Shard { offset: 2, items: vec!['l', 'l'] });
        assert_eq!(shards[2], Shard { offset: 4, items: vec!['o'] });

        let total: usize = shards.iter().map(Shard::len).sum();
        assert_eq!(total, 5);
    }
}
