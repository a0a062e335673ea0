//! Short-circuiting pipeline helpers
//!
//! A flow runs an initial result through a sequence of steps. Each step
//! receives the previous step's unwrapped `Ok` value and returns a new
//! [`Result`](crate::Result); the first `Err` short-circuits the pipeline
//! and is propagated unchanged, and the remaining steps never run. The
//! tuple variants hand every step references to all previously unwrapped
//! values, newest last, so later steps can combine earlier outputs.
//!
//! Steps have heterogeneous value types, so the pipelines are macros rather
//! than functions:
//!
//! ```
//! use sumflow::{result_flow, Result};
//!
//! let total: Result<i32, String> = result_flow!(
//!     Result::Ok(2),
//!     |n| Result::Ok(n * 10),
//!     |n| Result::Ok(n + 1),
//! );
//! assert_eq!(total, Result::Ok(21));
//! ```
//!
//! The async variants expand to an `async move` block and are strictly
//! sequential. Step results go through [`std::future::IntoFuture`], and the
//! crate's `Result` is itself `IntoFuture`, so one pipeline accepts a mix of
//! synchronous steps (returning a `Result` directly) and asynchronous steps
//! (returning a future of one).
//!
//! A returned `Err` is expected failure and flows as data. A panic raised
//! inside a step is a programming defect: it is logged and re-raised with
//! its message prefixed `Fatal Uncontrolled error: `, aborting the pipeline.

use std::any::Any;
use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::error::panic_message;
use crate::result::Result;

/// Re-raises a captured step panic with the fatal prefix.
fn fatal(payload: Box<dyn Any + Send>) -> ! {
    let message = panic_message(payload.as_ref());
    tracing::error!(panic = %message, "pipeline step panicked");
    panic!("Fatal Uncontrolled error: {}", message)
}

/// Runs one synchronous pipeline step, trapping panics.
#[doc(hidden)]
pub fn run_step<T, E, F>(step: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(result) => result,
        Err(payload) => fatal(payload),
    }
}

/// Runs one asynchronous pipeline step, trapping panics raised while
/// constructing the future as well as inside it.
#[doc(hidden)]
pub async fn run_async_step<T, E, F, Fut>(step: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture<Output = Result<T, E>>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(future) => future.into_future(),
        Err(payload) => fatal(payload),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => fatal(payload),
    }
}

/// Runs `init` through a sequence of steps, each receiving the previous
/// step's unwrapped `Ok` value. The first `Err` short-circuits.
///
/// With no steps, evaluates to `init` unchanged.
#[macro_export]
macro_rules! result_flow {
    ($init:expr $(,)?) => {
        $init
    };
    ($init:expr, $($step:expr),+ $(,)?) => {{
        let __flow = $init;
        $(
            let __flow = match __flow {
                $crate::Result::Ok(__value) => $crate::flow::run_step(|| $step(__value)),
                $crate::Result::Err(__error) => $crate::Result::Err(__error),
            };
        )+
        __flow
    }};
}

/// Like [`result_flow!`], but each step receives references to all
/// previously unwrapped values positionally, newest last.
#[macro_export]
macro_rules! result_tuple_flow {
    ($init:expr $(,)?) => {
        $init
    };
    ($init:expr, $($step:expr),+ $(,)?) => {
        match $init {
            $crate::Result::Ok(__value) => {
                $crate::__result_tuple_flow!(@step (__value) $($step),+)
            }
            $crate::Result::Err(__error) => $crate::Result::Err(__error),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __result_tuple_flow {
    (@step ($($prior:ident)+) $step:expr) => {
        $crate::flow::run_step(|| $step($(&$prior),+))
    };
    (@step ($($prior:ident)+) $step:expr, $($rest:expr),+) => {
        match $crate::flow::run_step(|| $step($(&$prior),+)) {
            $crate::Result::Ok(__value) => {
                $crate::__result_tuple_flow!(@step ($($prior)+ __value) $($rest),+)
            }
            $crate::Result::Err(__error) => $crate::Result::Err(__error),
        }
    };
}

/// Asynchronous [`result_flow!`]: expands to an `async move` block. Steps
/// may return a bare `Result` or any future of one; execution is strictly
/// sequential.
#[macro_export]
macro_rules! result_async_flow {
    ($init:expr $(,)?) => {
        async move { $crate::flow::run_async_step(|| $init).await }
    };
    ($init:expr, $($step:expr),+ $(,)?) => {
        async move {
            let __flow = $crate::flow::run_async_step(|| $init).await;
            $(
                let __flow = match __flow {
                    $crate::Result::Ok(__value) => {
                        $crate::flow::run_async_step(|| $step(__value)).await
                    }
                    $crate::Result::Err(__error) => $crate::Result::Err(__error),
                };
            )+
            __flow
        }
    };
}

/// Asynchronous [`result_tuple_flow!`]: each step receives references to all
/// previously unwrapped values, and may be sync or async.
#[macro_export]
macro_rules! result_async_tuple_flow {
    ($init:expr $(,)?) => {
        async move { $crate::flow::run_async_step(|| $init).await }
    };
    ($init:expr, $($step:expr),+ $(,)?) => {
        async move {
            match $crate::flow::run_async_step(|| $init).await {
                $crate::Result::Ok(__value) => {
                    $crate::__result_async_tuple_flow!(@step (__value) $($step),+)
                }
                $crate::Result::Err(__error) => $crate::Result::Err(__error),
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __result_async_tuple_flow {
    (@step ($($prior:ident)+) $step:expr) => {
        $crate::flow::run_async_step(|| $step($(&$prior),+)).await
    };
    (@step ($($prior:ident)+) $step:expr, $($rest:expr),+) => {
        match $crate::flow::run_async_step(|| $step($(&$prior),+)).await {
            $crate::Result::Ok(__value) => {
                $crate::__result_async_tuple_flow!(@step ($($prior)+ __value) $($rest),+)
            }
            $crate::Result::Err(__error) => $crate::Result::Err(__error),
        }
    };
}
