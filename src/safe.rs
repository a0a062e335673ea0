//! Panic-capturing adapters over arbitrary functions
//!
//! The safe wrappers run a function (or await a future) and never panic
//! themselves: a normal return lands in `Ok`, and a panic is captured as a
//! [`CaughtPanic`] in the `Err` channel. Expected failures and programming
//! defects then travel the same road and can be handled with the ordinary
//! combinators.
//!
//! The `_flat` variants adapt functions that already return a
//! [`Result`](crate::Result): the returned result passes through verbatim,
//! never re-wrapped, and only a panic is converted into the error type.

use std::any::Any;
use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::{panic_message, CaughtPanic};
use crate::result::Result;

/// Converts a captured panic payload into error data.
fn caught(payload: Box<dyn Any + Send>) -> CaughtPanic {
    let message = panic_message(payload.as_ref());
    tracing::debug!(panic = %message, "captured panic in safe wrapper");
    CaughtPanic::new(message)
}

/// Runs `f`, wrapping its return in `Ok` and any panic in `Err`.
pub fn safe_result<T, F>(f: F) -> Result<T, CaughtPanic>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(caught(payload)),
    }
}

/// Runs `f`, which already returns a [`Result`]. The returned result passes
/// through unchanged; only a panic is converted, via `E::from`.
pub fn safe_result_flat<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<CaughtPanic>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Result::Err(E::from(caught(payload))),
    }
}

/// Curried form of [`safe_result`]: wraps a one-argument function into a new
/// one with the same parameter that captures panics on every call.
pub fn safe_result_builder<A, T, F>(f: F) -> impl Fn(A) -> Result<T, CaughtPanic>
where
    F: Fn(A) -> T,
{
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(caught(payload)),
    }
}

/// Awaits anything `IntoFuture`, settling resolution into `Ok` and a panic
/// into `Err`.
pub async fn safe_async_result<T, Fut>(future: Fut) -> Result<T, CaughtPanic>
where
    Fut: IntoFuture<Output = T>,
{
    match AssertUnwindSafe(future.into_future()).catch_unwind().await {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(caught(payload)),
    }
}

/// Awaits a future of a [`Result`], passing the settled result through
/// unchanged and converting only a panic, via `E::from`.
pub async fn safe_async_result_flat<T, E, Fut>(future: Fut) -> Result<T, E>
where
    Fut: IntoFuture<Output = Result<T, E>>,
    E: From<CaughtPanic>,
{
    match AssertUnwindSafe(future.into_future()).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Result::Err(E::from(caught(payload))),
    }
}

/// Curried async form: wraps a one-argument future-returning function into
/// one whose futures always settle. Panics raised synchronously while
/// constructing the future are captured the same as panics inside it.
pub fn safe_async_result_builder<A, T, F, Fut>(
    f: F,
) -> impl Fn(A) -> BoxFuture<'static, Result<T, CaughtPanic>>
where
    F: Fn(A) -> Fut,
    Fut: IntoFuture<Output = T>,
    Fut::IntoFuture: Send + 'static,
    T: Send + 'static,
{
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(future) => AssertUnwindSafe(future.into_future())
            .catch_unwind()
            .map(|settled| match settled {
                Ok(value) => Result::Ok(value),
                Err(payload) => Result::Err(caught(payload)),
            })
            .boxed(),
        Err(payload) => {
            let error = caught(payload);
            futures::future::ready(Result::Err(error)).boxed()
        }
    }
}
