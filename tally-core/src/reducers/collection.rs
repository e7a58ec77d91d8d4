//! Reducers that collect elements into containers

use crate::error::Result;
use crate::reducer::SequenceReducer;
use std::collections::HashSet;
use std::hash::Hash;

/// Collects every element into a `Vec`, in input order. Empty input yields `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToVec;

impl<T: Send> SequenceReducer<T> for ToVec {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn supplier(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<T>, element: T) -> Result<()> {
        acc.push(element);
        Ok(())
    }

    fn merge(&self, mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
        left.append(&mut right);
        left
    }

    fn finish(&self, acc: Vec<T>) -> Result<Vec<T>> {
        Ok(acc)
    }

    fn name(&self) -> &'static str {
        "to-vec"
    }
}

/// Keeps the first occurrence of each distinct element, in input order.
/// Empty input yields `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distinct;

/// Accumulator for [`Distinct`]
#[derive(Debug, Clone)]
pub struct DistinctBuffer<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for DistinctBuffer<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T> SequenceReducer<T> for Distinct
where
    T: Eq + Hash + Clone + Send,
{
    type Acc = DistinctBuffer<T>;
    type Output = Vec<T>;

    fn supplier(&self) -> DistinctBuffer<T> {
        DistinctBuffer::default()
    }

    fn accumulate(&self, acc: &mut DistinctBuffer<T>, element: T) -> Result<()> {
        if acc.seen.insert(element.clone()) {
            acc.order.push(element);
        }
        Ok(())
    }

    fn merge(&self, mut left: DistinctBuffer<T>, right: DistinctBuffer<T>) -> DistinctBuffer<T> {
        for element in right.order {
            if left.seen.insert(element.clone()) {
                left.order.push(element);
            }
        }
        left
    }

    fn finish(&self, acc: DistinctBuffer<T>) -> Result<Vec<T>> {
        Ok(acc.order)
    }

    fn name(&self) -> &'static str {
        "distinct"
    }
}
