//! Success/failure container and operations
//!
//! The [`Result`] type represents an operation that either succeeded with a
//! value (`Ok`) or failed with an error (`Err`). The error side carries any
//! type, not just `std::error::Error` implementors. Like
//! [`Option`](crate::Option), it shadows the prelude type on purpose —
//! import it explicitly and write variants qualified (`Result::Ok`,
//! `Result::Err`).
//!
//! A `Result` is immutable after construction: there are no in-place
//! tag-rewriting operations. The combinators are Ok-biased —
//! [`and_then`](Result::and_then) chains success, [`or_else`](Result::or_else)
//! attempts recovery — mirroring the asymmetry between value and error
//! channels.

use std::fmt;
use std::future::{ready, IntoFuture, Ready};

use serde::{Deserialize, Serialize};

use crate::error::error_chain;
use crate::option::Option;

/// The success/failure type
///
/// Either `Ok` holding a success value or `Err` holding an error value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "$class", content = "value")]
pub enum Result<T, E> {
    /// Operation succeeded with a value
    #[serde(rename = "Result::Ok")]
    Ok(T),
    /// Operation failed with an error
    #[serde(rename = "Result::Err")]
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` if the result is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    /// Returns the success value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics with the stored error's debug form if the result is `Err`.
    /// Use [`unwrap_chain`](Result::unwrap_chain) to include the error's
    /// cause chain instead.
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => {
                panic!("called `Result::unwrap()` on an `Err` value: {:?}", error)
            }
        }
    }

    /// Returns the success value, panicking with the error's display form
    /// followed by its full source chain rendered as `Caused by:` lines.
    ///
    /// The chain is computed once, at the point of panic, so the original
    /// failure site survives however the panic message is propagated.
    #[inline]
    pub fn unwrap_chain(self) -> T
    where
        E: std::error::Error,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => panic!("{}", error_chain(&error)),
        }
    }

    /// Returns the error value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics with the success value's debug form if the result is `Ok`.
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Result::Ok(value) => {
                panic!("called `Result::unwrap_err()` on an `Ok` value: {:?}", value)
            }
            Result::Err(error) => error,
        }
    }

    /// Returns the success value, panicking with `message` on `Err`.
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => panic!("{}", message),
        }
    }

    /// Returns the error value, panicking with `message` on `Ok`.
    #[inline]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Result::Ok(_) => panic!("{}", message),
            Result::Err(error) => error,
        }
    }

    /// Returns the success value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(error) => f(error),
        }
    }

    /// Returns the success value or the type's default value.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Result::Ok(value) => value,
            Result::Err(_) => T::default(),
        }
    }

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying a function to a
    /// contained success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Maps a `Result<T, E>` to `Result<T, F>` by applying a function to a
    /// contained error, leaving a success value untouched.
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => Result::Err(f(error)),
        }
    }

    /// Calls `f` with a reference to the success value, then returns the
    /// result unchanged. Observation only — a later `unwrap` behaves
    /// exactly as it would have without the call.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Result::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, then returns the result
    /// unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Result::Err(ref error) = self {
            f(error);
        }
        self
    }

    /// Returns `other` if the result is `Ok`, otherwise the stored error.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => other,
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Chains success: calls `f` with the success value and returns the
    /// produced result; an error short-circuits past the callback.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    /// Returns the result itself if `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F2>(self, other: Result<T, F2>) -> Result<T, F2> {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(_) => other,
        }
    }

    /// Attempts recovery: calls `f` with the error and returns the produced
    /// result; a success value passes through untouched.
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Err(error) => f(error),
        }
    }

    /// Returns a lazy iterator that yields the success value exactly once
    /// and terminates immediately for an error.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                Result::Ok(value) => Some(value),
                Result::Err(_) => None,
            },
        }
    }

    /// Projects the result into an [`Option`], discarding the error:
    /// `Ok` becomes `Some`, `Err` becomes `None`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Result::Ok(value) => Option::Some(value),
            Result::Err(_) => Option::None,
        }
    }

    /// Converts the success side into an [`Option`], discarding the error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        self.to_option()
    }

    /// Converts the error side into an [`Option`], discarding the value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Result::Ok(_) => Option::None,
            Result::Err(error) => Option::Some(error),
        }
    }

    /// Returns an independent copy with an identical tag and payload.
    #[inline]
    pub fn cloned(&self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.clone()
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match *self {
            Result::Ok(ref value) => Result::Ok(value),
            Result::Err(ref error) => Result::Err(error),
        }
    }

    /// Serializes into the canonical JSON value form.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        T: Serialize,
        E: Serialize,
    {
        serde_json::to_value(self)
    }

    /// Serializes into the canonical JSON string form.
    pub fn to_json_string(&self) -> serde_json::Result<String>
    where
        T: Serialize,
        E: Serialize,
    {
        serde_json::to_string(self)
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Converts `Result<Result<T, E>, E>` to `Result<T, E>`, removing one
    /// level of wrapping. Re-wrapping an already-wrapped value is therefore
    /// a no-op: `Ok(Ok(v)).flatten()` equals `Ok(v)`.
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Result::Ok(inner) => inner,
            Result::Err(error) => Result::Err(error),
        }
    }
}

impl<T: Default, E> Default for Result<T, E> {
    /// Returns `Ok(T::default())`.
    fn default() -> Self {
        Result::Ok(T::default())
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Ok(value) => write!(f, "Ok({})", value),
            Result::Err(error) => write!(f, "Err({})", error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Result::Ok(value),
            Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

/// Awaiting a `Result` yields it immediately, so async pipelines accept
/// synchronous steps (returning a bare `Result`) and asynchronous steps
/// (returning a future of one) interchangeably.
impl<T, E> IntoFuture for Result<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = Ready<Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self)
    }
}

/// Iterator over the success value of a [`Result`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: std::option::Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> std::option::Option<&'a T> {
        self.inner.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, thiserror::Error)]
    #[error("lookup failed")]
    struct LookupError {
        #[source]
        cause: std::num::ParseIntError,
    }

    #[test]
    fn test_is_ok_err() {
        let ok: Result<i32, &str> = Result::Ok(1);
        let err: Result<i32, &str> = Result::Err("e");
        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert!(err.is_err());
        assert!(!err.is_ok());
    }

    #[test]
    fn test_unwrap() {
        let ok: Result<i32, &str> = Result::Ok(9);
        assert_eq!(ok.unwrap(), 9);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_unwrap_err_value_panics() {
        let err: Result<i32, &str> = Result::Err("boom");
        err.unwrap();
    }

    #[test]
    #[should_panic(expected = "Caused by: invalid digit")]
    fn test_unwrap_chain_renders_causes() {
        let cause = "nope".parse::<i32>().unwrap_err();
        let err: Result<i32, LookupError> = Result::Err(LookupError { cause });
        err.unwrap_chain();
    }

    #[test]
    fn test_map_and_map_err() {
        let ok: Result<i32, &str> = Result::Ok(2);
        assert_eq!(ok.map(|n| n * 2), Result::Ok(4));

        let err: Result<i32, &str> = Result::Err("e");
        assert_eq!(err.map(|n| n * 2), Result::Err("e"));
        assert_eq!(err.map_err(|e| e.len()), Result::Err(1));
    }

    #[test]
    fn test_inspect_does_not_alter() {
        let seen = Cell::new(0);
        let ok: Result<i32, &str> = Result::Ok(5);
        let out = ok.inspect(|v| seen.set(*v));
        assert_eq!(seen.get(), 5);
        assert_eq!(out.unwrap(), 5);

        let err: Result<i32, String> = Result::Err(String::from("e"));
        let observed = Cell::new(false);
        let out = err.inspect(|_| observed.set(true));
        assert!(!observed.get());
        assert_eq!(out, Result::Err(String::from("e")));
    }

    #[test]
    fn test_inspect_err() {
        let lengths = Cell::new(0);
        let err: Result<i32, &str> = Result::Err("oops");
        let out = err.inspect_err(|e| lengths.set(e.len()));
        assert_eq!(lengths.get(), 4);
        assert_eq!(out, Result::Err("oops"));
    }

    #[test]
    fn test_and_then_short_circuit() {
        let calls = Cell::new(0);
        let step = |n: i32| {
            calls.set(calls.get() + 1);
            Result::<i32, &str>::Ok(n + 1)
        };

        let err: Result<i32, &str> = Result::Err("e");
        assert_eq!(err.and_then(step), Result::Err("e"));
        assert_eq!(calls.get(), 0);

        let ok: Result<i32, &str> = Result::Ok(1);
        assert_eq!(ok.and_then(step), Result::Ok(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_else_recovers() {
        let err: Result<i32, &str> = Result::Err("e");
        assert_eq!(err.or_else(|e| Result::<_, &str>::Ok(e.len() as i32)), Result::Ok(1));

        let ok: Result<i32, &str> = Result::Ok(3);
        assert_eq!(ok.or_else(|_| Result::<_, &str>::Ok(0)), Result::Ok(3));
    }

    #[test]
    fn test_iter() {
        let ok: Result<i32, &str> = Result::Ok(4);
        let collected: Vec<&i32> = ok.iter().collect();
        assert_eq!(collected, vec![&4]);

        let err: Result<i32, &str> = Result::Err("e");
        assert_eq!(err.iter().next(), None);
    }

    #[test]
    fn test_to_option() {
        let ok: Result<i32, &str> = Result::Ok(2);
        assert_eq!(ok.to_option(), Option::Some(2));

        let err: Result<i32, &str> = Result::Err("e");
        assert_eq!(err.to_option(), Option::None);
        assert_eq!(err.err(), Option::Some("e"));
    }

    #[test]
    fn test_flatten_collapses_wrapping() {
        let nested: Result<Result<i32, &str>, &str> = Result::Ok(Result::Ok(1));
        assert_eq!(nested.flatten(), Result::Ok(1));

        let inner_err: Result<Result<i32, &str>, &str> = Result::Ok(Result::Err("e"));
        assert_eq!(inner_err.flatten(), Result::Err("e"));
    }

    #[test]
    fn test_default() {
        let d: Result<i32, &str> = Result::default();
        assert_eq!(d, Result::Ok(0));
    }

    #[test]
    fn test_display() {
        let ok: Result<i32, &str> = Result::Ok(42);
        assert_eq!(ok.to_string(), "Ok(42)");

        let err: Result<i32, &str> = Result::Err("bad input");
        assert_eq!(err.to_string(), "Err(bad input)");
    }

    #[test]
    fn test_ordering() {
        let a: Result<i32, i32> = Result::Ok(2);
        let b: Result<i32, i32> = Result::Err(1);
        assert!(a < b);
    }

    #[test]
    fn test_std_conversion_roundtrip() {
        let ours: Result<i32, &str> = Result::Ok(1);
        let std_side: std::result::Result<i32, &str> = ours.into();
        assert_eq!(std_side, Ok(1));
        assert_eq!(Result::from(std_side), ours);
    }
}
