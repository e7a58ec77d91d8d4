//! Monoid algebra and tree reduction
//!
//! Splitting a sequence into shards and merging the partial results back is
//! only sound when the merge step is associative. Monoids capture exactly
//! that: an associative `combine` plus an `identity` for empty input.

use crate::error::Result;
use crate::reducer::SequenceReducer;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// A mathematical monoid structure that enables parallel computation
///
/// A monoid is an algebraic structure with an associative binary operation
/// and an identity element:
/// - Associativity: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
/// - Identity: a ⊕ identity = identity ⊕ a = a
///
/// Note that commutativity is *not* required. String concatenation is a
/// monoid, and shards must be combined in their original order.
pub trait Monoid: Clone + Send + Sync {
    /// Returns the identity element of the monoid
    ///
    /// The identity element must satisfy: a.combine(Self::identity()) == a
    /// for all values a of this type.
    fn identity() -> Self;

    /// Combines two elements of the monoid
    ///
    /// This operation must be associative: a.combine(b.combine(c)) == a.combine(b).combine(c)
    /// for all values a, b, c of this type.
    fn combine(&self, other: &Self) -> Self;
}

/// Extension trait for monoids that can be reduced from collections
pub trait MonoidReduce: Monoid {
    /// Reduces a collection of monoid elements to a single result
    ///
    /// Uses tree reduction to maintain O(log n) depth even with many elements.
    fn reduce<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        tree_merge(iter, |left, right| left.combine(&right)).unwrap_or_else(Self::identity)
    }
}

impl<M: Monoid> MonoidReduce for M {}

/// Pairwise tree reduction over owned values.
///
/// Only adjacent items are ever merged and the left item always stays on the
/// left, so for an associative `merge` the result equals a left fold.
/// Returns `None` for an empty input.
pub fn tree_merge<A, I, F>(items: I, mut merge: F) -> Option<A>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, A) -> A,
{
    // Use SmallVec to avoid heap allocation for small collections
    let mut level: SmallVec<[A; 16]> = items.into_iter().collect();

    // Tree reduction: combine pairs until only one remains
    while level.len() > 1 {
        let mut next_level = SmallVec::<[A; 16]>::with_capacity(level.len().div_ceil(2));
        let mut drain = level.into_iter();

        while let Some(left) = drain.next() {
            match drain.next() {
                Some(right) => next_level.push(merge(left, right)),
                None => next_level.push(left),
            }
        }

        level = next_level;
    }

    level.into_iter().next()
}

/// Adapts a [`Monoid`] into a [`SequenceReducer`].
///
/// Each element is lifted into the monoid with `From<T>` and combined onto
/// the accumulator. The empty identity is `M::identity()`.
pub struct MonoidReducer<M> {
    _monoid: PhantomData<fn() -> M>,
}

impl<M> MonoidReducer<M> {
    /// Create a reducer for the monoid `M`
    pub fn new() -> Self {
        Self {
            _monoid: PhantomData,
        }
    }
}

impl<M> Default for MonoidReducer<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for MonoidReducer<M> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<M> std::fmt::Debug for MonoidReducer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MonoidReducer")
    }
}

impl<T, M> SequenceReducer<T> for MonoidReducer<M>
where
    M: Monoid + From<T>,
{
    type Acc = M;
    type Output = M;

    fn supplier(&self) -> M {
        M::identity()
    }

    fn accumulate(&self, acc: &mut M, element: T) -> Result<()> {
        *acc = acc.combine(&M::from(element));
        Ok(())
    }

    fn merge(&self, left: M, right: M) -> M {
        left.combine(&right)
    }

    fn finish(&self, acc: M) -> Result<M> {
        Ok(acc)
    }

    fn name(&self) -> &'static str {
        "monoid"
    }
}
