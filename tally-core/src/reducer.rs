//! The sequence reducer contract and the in-flight reduction state
//!
//! A [`SequenceReducer`] describes how to fold elements of type `T` into an
//! accumulator and how to turn that accumulator into a result. A
//! [`Reduction`] owns one accumulator while it is being filled and is
//! consumed when merged or finished, so an accumulator can never be reused
//! after either step.

use crate::error::Result;
use std::marker::PhantomData;

/// A fold over an ordered sequence that can also be split and merged.
///
/// Implementations must uphold:
/// - `supplier` returns a fresh, independent accumulator on every call
/// - `accumulate` is deterministic for the same prior state and element
/// - `merge(left, right)` is equivalent to having accumulated the elements of
///   `left` followed by the elements of `right`, and is associative
/// - `finish` is only ever called once per top-level reduction
pub trait SequenceReducer<T>: Send + Sync {
    /// Intermediate, mutable state
    type Acc: Send;

    /// Finished, externally visible result
    type Output;

    /// Create an empty accumulator
    fn supplier(&self) -> Self::Acc;

    /// Fold one element into the accumulator
    ///
    /// Failures are reported as [`CoreError::ElementProcessing`](crate::CoreError::ElementProcessing);
    /// the index is filled in by the caller driving the reduction.
    fn accumulate(&self, acc: &mut Self::Acc, element: T) -> Result<()>;

    /// Combine two accumulators, `left` holding the earlier elements
    fn merge(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;

    /// Convert a completed accumulator into the result
    fn finish(&self, acc: Self::Acc) -> Result<Self::Output>;

    /// Short name used in logs and error messages
    fn name(&self) -> &'static str {
        "reducer"
    }
}

impl<T, R> SequenceReducer<T> for &R
where
    R: SequenceReducer<T> + ?Sized,
{
    type Acc = R::Acc;
    type Output = R::Output;

    fn supplier(&self) -> Self::Acc {
        (**self).supplier()
    }

    fn accumulate(&self, acc: &mut Self::Acc, element: T) -> Result<()> {
        (**self).accumulate(acc, element)
    }

    fn merge(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc {
        (**self).merge(left, right)
    }

    fn finish(&self, acc: Self::Acc) -> Result<Self::Output> {
        (**self).finish(acc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// One in-flight reduction: an owned accumulator plus bookkeeping.
///
/// Every method that can fail takes `self` by value, so a reduction that hit
/// an element error is dropped instead of being finished.
pub struct Reduction<'r, T, R>
where
    R: SequenceReducer<T> + ?Sized,
{
    reducer: &'r R,
    acc: R::Acc,
    start: usize,
    consumed: usize,
    _element: PhantomData<fn(T)>,
}

impl<'r, T, R> Reduction<'r, T, R>
where
    R: SequenceReducer<T> + ?Sized,
{
    /// Start an empty reduction over a whole sequence
    pub fn new(reducer: &'r R) -> Self {
        Self::starting_at(reducer, 0)
    }

    /// Start an empty reduction for a shard whose first element sits at
    /// `offset` in the original sequence
    pub fn starting_at(reducer: &'r R, offset: usize) -> Self {
        Self {
            reducer,
            acc: reducer.supplier(),
            start: offset,
            consumed: 0,
            _element: PhantomData,
        }
    }

    /// Fold a single element
    pub fn push(mut self, element: T) -> Result<Self> {
        let index = self.start + self.consumed;
        self.reducer
            .accumulate(&mut self.acc, element)
            .map_err(|e| e.at_index(index))?;
        self.consumed += 1;
        Ok(self)
    }

    /// Fold every element of `elements`, in order
    pub fn extend<I>(mut self, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self = self.push(element)?;
        }
        Ok(self)
    }

    /// Merge with the reduction of the elements that directly follow this one
    pub fn merge(self, right: Self) -> Self {
        Self {
            reducer: self.reducer,
            acc: self.reducer.merge(self.acc, right.acc),
            start: self.start,
            consumed: self.consumed + right.consumed,
            _element: PhantomData,
        }
    }

    /// Finish the reduction, consuming the accumulator
    pub fn finish(self) -> Result<R::Output> {
        self.reducer.finish(self.acc)
    }

    /// Number of elements folded so far, merged shards included
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Position of this reduction's first element in the original sequence
    pub fn start(&self) -> usize {
        self.start
    }

    /// True if no element has been folded yet
    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// Borrow the reducer driving this reduction
    pub fn reducer(&self) -> &'r R {
        self.reducer
    }
}

impl<T, R> std::fmt::Debug for Reduction<'_, T, R>
where
    R: SequenceReducer<T> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reduction")
            .field("reducer", &self.reducer.name())
            .field("start", &self.start)
            .field("consumed", &self.consumed)
            .finish()
    }
}

/// Fold a whole sequence sequentially and finish it
pub fn reduce_all<T, R, I>(reducer: &R, elements: I) -> Result<R::Output>
where
    R: SequenceReducer<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    Reduction::new(reducer).extend(elements)?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::reducers::{CharToString, TryMapping};

    #[test]
    fn test_reduce_empty_sequence() {
        let result = reduce_all(&CharToString, Vec::<char>::new()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_reduce_preserves_order() {
        let result = reduce_all(&CharToString, vec!['a', 'b', 'c']).unwrap();
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_merge_two_shards() {
        let reducer = CharToString;
        let left = Reduction::new(&reducer).extend(vec!['H', 'e']).unwrap();
        let right = Reduction::starting_at(&reducer, 2)
            .extend(vec!['l', 'l', 'o'])
            .unwrap();

        let merged = left.merge(right);
        assert_eq!(merged.consumed(), 5);
        assert_eq!(merged.start(), 0);
        assert_eq!(merged.finish().unwrap(), "Hello");
    }

    #[test]
    fn test_independent_reductions() {
        let reducer = CharToString;
        let first = Reduction::new(&reducer).push('x').unwrap();
        let second = Reduction::new(&reducer).push('y').unwrap();

        assert_eq!(first.finish().unwrap(), "x");
        assert_eq!(second.finish().unwrap(), "y");
    }

    #[test]
    fn test_element_error_carries_shard_offset() {
        let reducer = TryMapping::new(|s: &str| s.parse::<char>(), CharToString);
        let error = Reduction::starting_at(&reducer, 10)
            .extend(vec!["a", "b", "cd"])
            .unwrap_err();

        match error {
            CoreError::ElementProcessing { index, .. } => assert_eq!(index, 12),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reducer_by_reference() {
        let reducer = CharToString;
        let by_ref = &reducer;
        assert_eq!(reduce_all(&by_ref, "ok".chars()).unwrap(), "ok");
        assert_eq!(by_ref.name(), "chars-to-string");
    }

    #[test]
    fn test_debug_format() {
        let reducer = CharToString;
        let reduction = Reduction::new(&reducer).push('a').unwrap();
        let debug = format!("{reduction:?}");
        assert!(debug.contains("chars-to-string"));
        assert!(debug.contains("consumed: 1"));
    }
}
