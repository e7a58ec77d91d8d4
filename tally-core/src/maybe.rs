//! An explicit present-or-absent value
//!
//! `Maybe` carries the same information as `Option` but spells out the
//! combinators used by the pipelines in this workspace, including
//! [`Maybe::value_or_fail`] for turning absence into a caller-chosen error.

use thiserror::Error;

/// Returned by [`Maybe::value`] when no value is present
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("no value present")]
pub struct MissingValue;

/// A value that is either present or absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present
    Present(T),
    /// No value
    Absent,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    /// Wrap a value
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// The absent value
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// `Present` for `Some`, `Absent` for `None`
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// True if a value is present
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// True if no value is present
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the contained value
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transform the value. `f` is not called when absent.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transform the value with a function that may itself produce nothing.
    /// `f` is not called when absent.
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if `predicate` holds
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// The value, or `default` when absent
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// The value, or the result of `fallback` when absent
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback(),
        }
    }

    /// The value, or `error` when absent
    pub fn value_or_fail<E>(self, error: E) -> Result<T, E> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(error),
        }
    }

    /// The value, or [`MissingValue`] when absent
    pub fn value(self) -> Result<T, MissingValue> {
        self.value_or_fail(MissingValue)
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
