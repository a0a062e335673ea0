//! Optional-value container and operations
//!
//! The [`Option`] type represents a value that may or may not be present:
//! `Some` holds exactly one value, `None` holds nothing. It deliberately
//! shadows the prelude type — import it explicitly and write variants
//! qualified (`Option::Some`, `Option::None`).
//!
//! Unlike [`Result`](crate::Result), an `Option` is a single-owner mutable
//! cell: [`take`](Option::take), [`replace`](Option::replace),
//! [`insert`](Option::insert) and [`get_or_insert`](Option::get_or_insert)
//! rewrite the tag in place. Concurrent mutation of a shared instance is not
//! supported.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// The optional-value type
///
/// Either `None` (empty) or `Some` holding a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "$class", content = "value")]
pub enum Option<T> {
    /// No value
    #[serde(rename = "Option::None")]
    None,
    /// Contains a value
    #[serde(rename = "Option::Some")]
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if the option holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Option::Some(_))
    }

    /// Returns `true` if the option is empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Option::None)
    }

    /// Returns the contained value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => panic!("called `Option::unwrap()` on an empty value"),
        }
    }

    /// Returns the contained value, panicking with `message` if empty.
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => panic!("{}", message),
        }
    }

    /// Returns the contained value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => default,
        }
    }

    /// Returns the contained value or computes it from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Option::Some(value) => value,
            Option::None => f(),
        }
    }

    /// Returns the contained value or the type's default value.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Option::Some(value) => value,
            Option::None => T::default(),
        }
    }

    /// Maps an `Option<T>` to `Option<U>` by applying a function to a
    /// contained value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::Some(f(value)),
            Option::None => Option::None,
        }
    }

    /// Returns `other` if the option holds a value, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Option::Some(_) => other,
            Option::None => Option::None,
        }
    }

    /// Calls `f` with the contained value and returns the produced option;
    /// returns `None` unchanged when empty.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => Option::None,
        }
    }

    /// Returns the option itself if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => other,
        }
    }

    /// Returns the option itself if it holds a value, otherwise computes an
    /// alternative from a closure.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => f(),
        }
    }

    /// Keeps the contained value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Option::Some(value) if predicate(&value) => Option::Some(value),
            _ => Option::None,
        }
    }

    /// Takes the value out, leaving `None` in its place, and returns the
    /// prior state as a detached snapshot.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        std::mem::replace(self, Option::None)
    }

    /// Stores `value`, always resulting in `Some`, and returns the prior
    /// state as a detached snapshot.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Option::Some(value))
    }

    /// Stores `value`, always resulting in `Some`, and returns a mutable
    /// reference to it. The prior value, if any, is dropped.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Option::Some(value);
        match self {
            Option::Some(value) => value,
            Option::None => unreachable!(),
        }
    }

    /// Returns a mutable reference to the contained value, first storing
    /// `value` if the option is empty.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        if let Option::None = self {
            *self = Option::Some(value);
        }
        match self {
            Option::Some(value) => value,
            Option::None => unreachable!(),
        }
    }

    /// Returns an independent copy with an identical tag and value.
    #[inline]
    pub fn cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.clone()
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match *self {
            Option::Some(ref value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match *self {
            Option::Some(ref mut value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Returns an iterator yielding the contained value at most once.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }

    /// Looks up a thunk keyed by the contained value and invokes it.
    ///
    /// This is an equality-keyed lookup table, not a general pattern
    /// matcher: the contained value must compare equal to a key for its
    /// thunk to run. Returns `None` when the option is empty or the value
    /// is not listed — chain [`unwrap_or`](Option::unwrap_or) for a
    /// default arm.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use sumflow::Option;
    ///
    /// let table = HashMap::from([(1, || "one")]);
    /// assert_eq!(Option::Some(1).dispatch(&table).unwrap_or("other"), "one");
    /// assert_eq!(Option::Some(2).dispatch(&table).unwrap_or("other"), "other");
    /// ```
    pub fn dispatch<R, F>(&self, table: &HashMap<T, F>) -> Option<R>
    where
        T: Eq + Hash,
        F: Fn() -> R,
    {
        match self {
            Option::Some(value) => match table.get(value) {
                Some(thunk) => Option::Some(thunk()),
                None => Option::None,
            },
            Option::None => Option::None,
        }
    }

    /// Projects the option into a [`Result`]: `Some` becomes `Ok`, `None`
    /// becomes `Err` carrying the supplied substitute error.
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<T, E> {
        match self {
            Option::Some(value) => Result::Ok(value),
            Option::None => Result::Err(error),
        }
    }

    /// Serializes into the canonical JSON value form.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        T: Serialize,
    {
        serde_json::to_value(self)
    }

    /// Serializes into the canonical JSON string form.
    pub fn to_json_string(&self) -> serde_json::Result<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self)
    }
}

impl<T> Option<Option<T>> {
    /// Converts `Option<Option<T>>` to `Option<T>`, removing one level of
    /// wrapping.
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Option::Some(inner) => inner,
            Option::None => Option::None,
        }
    }
}

impl<T> Default for Option<T> {
    /// Returns `None`.
    fn default() -> Self {
        Option::None
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Option::Some(value) => write!(f, "Some({})", value),
            Option::None => write!(f, "None()"),
        }
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            Some(value) => Option::Some(value),
            None => Option::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }
}

/// Iterator over the contained value of an [`Option`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> std::option::Option<&'a T> {
        self.inner.take().into()
    }
}
