//! Error types for codec reconstruction and panic capture

use std::any::Any;
use std::fmt::Write;

use thiserror::Error;

/// Errors raised while reconstructing a container from its JSON form.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The `$class` discriminator names no known variant.
    #[error("unknown $class discriminator: {0}")]
    UnknownClass(String),

    /// The input is not an object carrying a `$class` discriminator.
    #[error("value is not an encoded container")]
    NotAnEncodedValue,

    /// The payload under `value` (or the input itself) failed to parse.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// A panic captured by a safe wrapper, carried as ordinary error data.
///
/// Safe wrappers never re-raise; the panic's message (or a stringified form
/// of a non-string payload) travels through the `Err` channel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Creates a captured-panic error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        CaughtPanic {
            message: message.into(),
        }
    }

    /// The captured panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Extracts a printable message from a panic payload.
///
/// Panics raised with `panic!("…")` carry `&str` or `String`; anything else
/// is reported generically.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("non-string panic payload")
    }
}

/// Renders an error and its full `source()` chain, one `Caused by:` line per
/// level.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        // A write to a String cannot fail.
        let _ = write!(rendered, "\nCaused by: {}", cause);
        source = cause.source();
    }
    rendered
}
