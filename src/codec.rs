//! JSON wire codec for the container types
//!
//! Serialized containers are JSON objects tagged with a `$class`
//! discriminator:
//!
//! ```json
//! {"$class": "Option::Some", "value": 1}
//! {"$class": "Option::None"}
//! {"$class": "Result::Ok", "value": "done"}
//! {"$class": "Result::Err", "value": "broken"}
//! ```
//!
//! Serialization lives on the types themselves (`to_json`,
//! `to_json_string`); this module holds the discriminator constants, shape
//! predicates over raw [`serde_json::Value`]s, and the reconstruction
//! helpers. Reconstruction fails loudly: an unknown `$class`, a non-object
//! input, or a payload that does not parse as the target type is a
//! [`CodecError`], never a silently-wrong container.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::option::Option;
use crate::result::Result;

/// Discriminator for a populated optional value.
pub const OPTION_SOME: &str = "Option::Some";
/// Discriminator for an empty optional value.
pub const OPTION_NONE: &str = "Option::None";
/// Discriminator for a success value.
pub const RESULT_OK: &str = "Result::Ok";
/// Discriminator for a failure value.
pub const RESULT_ERR: &str = "Result::Err";

/// Extracts the `$class` discriminator, if the value carries one.
fn class_of(value: &Value) -> std::option::Option<&str> {
    value.as_object()?.get("$class")?.as_str()
}

/// Returns `true` if `value` has the shape of an encoded optional value.
pub fn is_json_option(value: &Value) -> bool {
    is_json_some(value) || is_json_none(value)
}

/// Returns `true` if `value` has the shape of an encoded `Some`.
pub fn is_json_some(value: &Value) -> bool {
    class_of(value) == Some(OPTION_SOME)
}

/// Returns `true` if `value` has the shape of an encoded `None`.
pub fn is_json_none(value: &Value) -> bool {
    class_of(value) == Some(OPTION_NONE)
}

/// Returns `true` if `value` has the shape of an encoded result.
pub fn is_json_result(value: &Value) -> bool {
    is_json_ok(value) || is_json_err(value)
}

/// Returns `true` if `value` has the shape of an encoded `Ok`.
pub fn is_json_ok(value: &Value) -> bool {
    class_of(value) == Some(RESULT_OK)
}

/// Returns `true` if `value` has the shape of an encoded `Err`.
pub fn is_json_err(value: &Value) -> bool {
    class_of(value) == Some(RESULT_ERR)
}

/// Reconstructs an [`Option`] from its encoded JSON value.
pub fn from_json_option<T>(value: Value) -> CodecResult<Option<T>>
where
    T: DeserializeOwned,
{
    let class = class_of(&value).map(str::to_owned);
    match class.as_deref() {
        Some(OPTION_SOME) | Some(OPTION_NONE) => Ok(serde_json::from_value(value)?),
        Some(other) => Err(CodecError::UnknownClass(other.to_owned())),
        None => Err(CodecError::NotAnEncodedValue),
    }
}

/// Reconstructs an [`Option`] from its encoded JSON text.
pub fn from_json_option_str<T>(text: &str) -> CodecResult<Option<T>>
where
    T: DeserializeOwned,
{
    from_json_option(serde_json::from_str(text)?)
}

/// Reconstructs a [`Result`] from its encoded JSON value.
pub fn from_json_result<T, E>(value: Value) -> CodecResult<Result<T, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let class = class_of(&value).map(str::to_owned);
    match class.as_deref() {
        Some(RESULT_OK) | Some(RESULT_ERR) => Ok(serde_json::from_value(value)?),
        Some(other) => Err(CodecError::UnknownClass(other.to_owned())),
        None => Err(CodecError::NotAnEncodedValue),
    }
}

/// Reconstructs a [`Result`] from its encoded JSON text.
pub fn from_json_result_str<T, E>(text: &str) -> CodecResult<Result<T, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    from_json_result(serde_json::from_str(text)?)
}
