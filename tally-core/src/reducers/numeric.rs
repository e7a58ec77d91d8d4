//! Numeric reducers: sums, counts, statistics and extremes

use crate::error::{CoreError, Result};
use crate::maybe::Maybe;
use crate::monoid::{Monoid, MonoidReducer};
use crate::reducer::SequenceReducer;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Sums integers. Empty input yields `0`.
///
/// Partial sums are kept in `i128`; a total outside the `i64` range is
/// reported as [`CoreError::Overflow`] when finishing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summing;

impl<T: Into<i64>> SequenceReducer<T> for Summing {
    type Acc = i128;
    type Output = i64;

    fn supplier(&self) -> i128 {
        0
    }

    fn accumulate(&self, acc: &mut i128, element: T) -> Result<()> {
        *acc += i128::from(element.into());
        Ok(())
    }

    fn merge(&self, left: i128, right: i128) -> i128 {
        left + right
    }

    fn finish(&self, acc: i128) -> Result<i64> {
        i64::try_from(acc).map_err(|_| CoreError::Overflow { reducer: "summing" })
    }

    fn name(&self) -> &'static str {
        "summing"
    }
}

/// Counts elements. Empty input yields `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counting;

impl<T> SequenceReducer<T> for Counting {
    type Acc = u64;
    type Output = u64;

    fn supplier(&self) -> u64 {
        0
    }

    fn accumulate(&self, acc: &mut u64, _element: T) -> Result<()> {
        *acc += 1;
        Ok(())
    }

    fn merge(&self, left: u64, right: u64) -> u64 {
        left + right
    }

    fn finish(&self, acc: u64) -> Result<u64> {
        Ok(acc)
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Count, sum, minimum and maximum of a run of integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    count: u64,
    sum: i128,
    min: Maybe<i64>,
    max: Maybe<i64>,
}

impl SummaryStatistics {
    /// Statistics of a single value
    pub fn of(value: i64) -> Self {
        Self {
            count: 1,
            sum: i128::from(value),
            min: Maybe::Present(value),
            max: Maybe::Present(value),
        }
    }

    /// Number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all values
    pub fn sum(&self) -> i128 {
        self.sum
    }

    /// Smallest value, absent when empty
    pub fn min(&self) -> Maybe<i64> {
        self.min
    }

    /// Largest value, absent when empty
    pub fn max(&self) -> Maybe<i64> {
        self.max
    }

    /// Arithmetic mean, absent when empty
    pub fn average(&self) -> Maybe<f64> {
        if self.count == 0 {
            Maybe::Absent
        } else {
            Maybe::Present(self.sum as f64 / self.count as f64)
        }
    }
}

fn pick(left: Maybe<i64>, right: Maybe<i64>, keep: fn(i64, i64) -> i64) -> Maybe<i64> {
    match (left, right) {
        (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(keep(a, b)),
        (Maybe::Present(a), Maybe::Absent) => Maybe::Present(a),
        (Maybe::Absent, other) => other,
    }
}

impl Monoid for SummaryStatistics {
    fn identity() -> Self {
        Self::default()
    }

    fn combine(&self, other: &Self) -> Self {
        Self {
            count: self.count + other.count,
            sum: self.sum + other.sum,
            min: pick(self.min, other.min, i64::min),
            max: pick(self.max, other.max, i64::max),
        }
    }
}

impl From<i64> for SummaryStatistics {
    fn from(value: i64) -> Self {
        Self::of(value)
    }
}

impl From<i32> for SummaryStatistics {
    fn from(value: i32) -> Self {
        Self::of(i64::from(value))
    }
}

impl From<u32> for SummaryStatistics {
    fn from(value: u32) -> Self {
        Self::of(i64::from(value))
    }
}

/// Builds [`SummaryStatistics`]. Empty input yields empty statistics.
pub type Summarizing = MonoidReducer<SummaryStatistics>;

/// Keeps the element with the greatest key. Ties keep the earliest element.
/// Empty input yields [`Maybe::Absent`].
pub struct MaxBy<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

/// Keeps the element with the smallest key. Ties keep the earliest element.
/// Empty input yields [`Maybe::Absent`].
pub struct MinBy<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> MaxBy<F, K> {
    /// Compare elements by `key`
    pub fn new(key: F) -> Self {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

impl<F, K> MinBy<F, K> {
    /// Compare elements by `key`
    pub fn new(key: F) -> Self {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

// `replace_on` decides whether the later element displaces the current one.
fn keep_extreme<T, K, F>(
    key: &F,
    current: Option<T>,
    candidate: Option<T>,
    replace_on: Ordering,
) -> Option<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    match (current, candidate) {
        (Some(current), Some(candidate)) => {
            if key(&candidate).cmp(&key(&current)) == replace_on {
                Some(candidate)
            } else {
                Some(current)
            }
        }
        (current, None) => current,
        (None, candidate) => candidate,
    }
}

impl<T, K, F> SequenceReducer<T> for MaxBy<F, K>
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Send + Sync,
{
    type Acc = Option<T>;
    type Output = Maybe<T>;

    fn supplier(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, element: T) -> Result<()> {
        *acc = keep_extreme(&self.key, acc.take(), Some(element), Ordering::Greater);
        Ok(())
    }

    fn merge(&self, left: Option<T>, right: Option<T>) -> Option<T> {
        keep_extreme(&self.key, left, right, Ordering::Greater)
    }

    fn finish(&self, acc: Option<T>) -> Result<Maybe<T>> {
        Ok(Maybe::from(acc))
    }

    fn name(&self) -> &'static str {
        "max-by"
    }
}

impl<T, K, F> SequenceReducer<T> for MinBy<F, K>
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Send + Sync,
{
    type Acc = Option<T>;
    type Output = Maybe<T>;

    fn supplier(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, acc: &mut Option<T>, element: T) -> Result<()> {
        *acc = keep_extreme(&self.key, acc.take(), Some(element), Ordering::Less);
        Ok(())
    }

    fn merge(&self, left: Option<T>, right: Option<T>) -> Option<T> {
        keep_extreme(&self.key, left, right, Ordering::Less)
    }

    fn finish(&self, acc: Option<T>) -> Result<Maybe<T>> {
        Ok(Maybe::from(acc))
    }

    fn name(&self) -> &'static str {
        "min-by"
    }
}
