//! Reducer adapters that reshape the input or tighten the output

use crate::error::{CoreError, Result};
use crate::reducer::SequenceReducer;
use std::fmt::Display;
use std::marker::PhantomData;

/// Transforms each element before handing it to a downstream reducer
pub struct Mapping<F, U, D> {
    transform: F,
    downstream: D,
    _mapped: PhantomData<fn() -> U>,
}

impl<F, U, D> Mapping<F, U, D> {
    /// Map elements with `transform`, then reduce with `downstream`
    pub fn new(transform: F, downstream: D) -> Self {
        Self {
            transform,
            downstream,
            _mapped: PhantomData,
        }
    }
}

impl<T, U, F, D> SequenceReducer<T> for Mapping<F, U, D>
where
    F: Fn(T) -> U + Send + Sync,
    D: SequenceReducer<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supplier(&self) -> D::Acc {
        self.downstream.supplier()
    }

    fn accumulate(&self, acc: &mut D::Acc, element: T) -> Result<()> {
        self.downstream.accumulate(acc, (self.transform)(element))
    }

    fn merge(&self, left: D::Acc, right: D::Acc) -> D::Acc {
        self.downstream.merge(left, right)
    }

    fn finish(&self, acc: D::Acc) -> Result<D::Output> {
        self.downstream.finish(acc)
    }

    fn name(&self) -> &'static str {
        self.downstream.name()
    }
}

/// Like [`Mapping`], for transforms that can fail.
///
/// A failed transform becomes [`CoreError::ElementProcessing`] and halts the
/// reduction.
pub struct TryMapping<F, U, E, D> {
    transform: F,
    downstream: D,
    _mapped: PhantomData<fn() -> (U, E)>,
}

impl<F, U, E, D> TryMapping<F, U, E, D> {
    /// Map elements with the fallible `transform`, then reduce with `downstream`
    pub fn new(transform: F, downstream: D) -> Self {
        Self {
            transform,
            downstream,
            _mapped: PhantomData,
        }
    }
}

impl<T, U, E, F, D> SequenceReducer<T> for TryMapping<F, U, E, D>
where
    F: Fn(T) -> std::result::Result<U, E> + Send + Sync,
    E: Display,
    D: SequenceReducer<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supplier(&self) -> D::Acc {
        self.downstream.supplier()
    }

    fn accumulate(&self, acc: &mut D::Acc, element: T) -> Result<()> {
        let mapped = (self.transform)(element).map_err(|e| CoreError::element(e.to_string()))?;
        self.downstream.accumulate(acc, mapped)
    }

    fn merge(&self, left: D::Acc, right: D::Acc) -> D::Acc {
        self.downstream.merge(left, right)
    }

    fn finish(&self, acc: D::Acc) -> Result<D::Output> {
        self.downstream.finish(acc)
    }

    fn name(&self) -> &'static str {
        self.downstream.name()
    }
}

/// Only passes elements matching a predicate to the downstream reducer
pub struct Filtering<P, D> {
    predicate: P,
    downstream: D,
}

impl<P, D> Filtering<P, D> {
    /// Keep elements for which `predicate` holds
    pub fn new(predicate: P, downstream: D) -> Self {
        Self {
            predicate,
            downstream,
        }
    }
}

impl<T, P, D> SequenceReducer<T> for Filtering<P, D>
where
    P: Fn(&T) -> bool + Send + Sync,
    D: SequenceReducer<T>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supplier(&self) -> D::Acc {
        self.downstream.supplier()
    }

    fn accumulate(&self, acc: &mut D::Acc, element: T) -> Result<()> {
        if (self.predicate)(&element) {
            self.downstream.accumulate(acc, element)
        } else {
            Ok(())
        }
    }

    fn merge(&self, left: D::Acc, right: D::Acc) -> D::Acc {
        self.downstream.merge(left, right)
    }

    fn finish(&self, acc: D::Acc) -> Result<D::Output> {
        self.downstream.finish(acc)
    }

    fn name(&self) -> &'static str {
        self.downstream.name()
    }
}

/// Refuses to finish a reduction that saw no elements.
///
/// Use this for reducers whose empty result would be misleading; finishing
/// with zero elements fails with [`CoreError::EmptyAccumulatorFinish`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty<D> {
    inner: D,
}

/// Accumulator for [`NonEmpty`]
#[derive(Debug, Clone)]
pub struct Counted<A> {
    seen: usize,
    inner: A,
}

impl<D> NonEmpty<D> {
    /// Require at least one element before `inner` may finish
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<T, D> SequenceReducer<T> for NonEmpty<D>
where
    D: SequenceReducer<T>,
{
    type Acc = Counted<D::Acc>;
    type Output = D::Output;

    fn supplier(&self) -> Self::Acc {
        Counted {
            seen: 0,
            inner: self.inner.supplier(),
        }
    }

    fn accumulate(&self, acc: &mut Self::Acc, element: T) -> Result<()> {
        self.inner.accumulate(&mut acc.inner, element)?;
        acc.seen += 1;
        Ok(())
    }

    fn merge(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc {
        Counted {
            seen: left.seen + right.seen,
            inner: self.inner.merge(left.inner, right.inner),
        }
    }

    fn finish(&self, acc: Self::Acc) -> Result<D::Output> {
        if acc.seen == 0 {
            return Err(CoreError::EmptyAccumulatorFinish {
                reducer: self.inner.name(),
            });
        }
        self.inner.finish(acc.inner)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
