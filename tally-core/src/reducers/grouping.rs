//! Keyed aggregation: group-by and partition-by with downstream reducers

use crate::error::Result;
use crate::reducer::SequenceReducer;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Groups elements by key and reduces each group with a downstream reducer.
///
/// Groups are keyed in a `BTreeMap`, so iteration order is the key order.
/// Within a group, elements reach the downstream reducer in input order.
/// Empty input yields an empty map.
pub struct GroupingBy<F, K, D> {
    key: F,
    downstream: D,
    _key: PhantomData<fn() -> K>,
}

impl<F, K, D> GroupingBy<F, K, D> {
    /// Group by `key`, reducing each group with `downstream`
    pub fn new(key: F, downstream: D) -> Self {
        Self {
            key,
            downstream,
            _key: PhantomData,
        }
    }
}

impl<T, F, K, D> SequenceReducer<T> for GroupingBy<F, K, D>
where
    F: Fn(&T) -> K + Send + Sync,
    K: Ord + Send,
    D: SequenceReducer<T>,
{
    type Acc = BTreeMap<K, D::Acc>;
    type Output = BTreeMap<K, D::Output>;

    fn supplier(&self) -> Self::Acc {
        BTreeMap::new()
    }

    fn accumulate(&self, acc: &mut Self::Acc, element: T) -> Result<()> {
        let group = acc
            .entry((self.key)(&element))
            .or_insert_with(|| self.downstream.supplier());
        self.downstream.accumulate(group, element)
    }

    fn merge(&self, mut left: Self::Acc, right: Self::Acc) -> Self::Acc {
        for (key, right_group) in right {
            let merged = match left.remove(&key) {
                Some(left_group) => self.downstream.merge(left_group, right_group),
                None => right_group,
            };
            left.insert(key, merged);
        }
        left
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        acc.into_iter()
            .map(|(key, group)| Ok((key, self.downstream.finish(group)?)))
            .collect()
    }

    fn name(&self) -> &'static str {
        "grouping-by"
    }
}

/// The two halves of a partition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partitioned<R> {
    /// Result for elements matching the predicate
    pub accepted: R,
    /// Result for the remaining elements
    pub rejected: R,
}

impl<R> Partitioned<R> {
    /// The half selected by a predicate outcome
    pub fn get(&self, matched: bool) -> &R {
        if matched {
            &self.accepted
        } else {
            &self.rejected
        }
    }
}

/// Splits elements by a predicate and reduces each side with a downstream
/// reducer. Both sides are always present; with no input both hold the
/// downstream reducer's empty result.
pub struct PartitioningBy<P, D> {
    predicate: P,
    downstream: D,
}

impl<P, D> PartitioningBy<P, D> {
    /// Partition by `predicate`, reducing each side with `downstream`
    pub fn new(predicate: P, downstream: D) -> Self {
        Self {
            predicate,
            downstream,
        }
    }
}

impl<T, P, D> SequenceReducer<T> for PartitioningBy<P, D>
where
    P: Fn(&T) -> bool + Send + Sync,
    D: SequenceReducer<T>,
{
    type Acc = Partitioned<D::Acc>;
    type Output = Partitioned<D::Output>;

    fn supplier(&self) -> Self::Acc {
        Partitioned {
            accepted: self.downstream.supplier(),
            rejected: self.downstream.supplier(),
        }
    }

    fn accumulate(&self, acc: &mut Self::Acc, element: T) -> Result<()> {
        if (self.predicate)(&element) {
            self.downstream.accumulate(&mut acc.accepted, element)
        } else {
            self.downstream.accumulate(&mut acc.rejected, element)
        }
    }

    fn merge(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc {
        Partitioned {
            accepted: self.downstream.merge(left.accepted, right.accepted),
            rejected: self.downstream.merge(left.rejected, right.rejected),
        }
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        Ok(Partitioned {
            accepted: self.downstream.finish(acc.accepted)?,
            rejected: self.downstream.finish(acc.rejected)?,
        })
    }

    fn name(&self) -> &'static str {
        "partitioning-by"
    }
}
