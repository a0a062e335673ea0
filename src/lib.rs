//! Chainable optional-value and success/failure containers
//!
//! # Overview
//!
//! This crate provides two algebraic sum types with a fluent combinator API:
//!
//! - [`Option<T>`]: a value that may be present (`Some`) or absent (`None`),
//!   with mutable-cell operations (`take`, `replace`, `insert`) on top of the
//!   usual combinators.
//! - [`Result<T, E>`]: an operation that succeeded (`Ok`) or failed (`Err`),
//!   with Ok-biased chaining and Err-side recovery.
//!
//! Both types deliberately shadow their prelude namesakes; import them
//! explicitly and write variants qualified. Lossless `From` bridges convert
//! to and from the `std` types at crate boundaries.
//!
//! Around the core types sit three layers:
//!
//! - [`codec`]: a JSON wire format tagged with a `$class` discriminator,
//!   with shape predicates and loud-failure reconstruction.
//! - [`flow`]: short-circuiting pipeline macros ([`result_flow!`],
//!   [`result_tuple_flow!`] and their async variants) that thread `Ok`
//!   values through heterogeneous steps and stop at the first `Err`.
//! - [`safe`]: panic-capturing adapters that settle any function or future
//!   into a `Result`.
//!
//! # Example
//!
//! ```
//! use sumflow::{result_flow, Option, Result};
//!
//! fn find_user(id: u32) -> Option<&'static str> {
//!     if id == 7 {
//!         Option::Some("ada")
//!     } else {
//!         Option::None
//!     }
//! }
//!
//! let greeting: Result<String, String> = result_flow!(
//!     find_user(7).to_result(String::from("no such user")),
//!     |name: &str| Result::Ok(format!("hello, {}", name)),
//! );
//! assert_eq!(greeting, Result::Ok(String::from("hello, ada")));
//! ```
//!
//! Expected failures travel as `Err` data; a panic inside a flow step is
//! treated as a fatal defect and re-raised with a `Fatal Uncontrolled
//! error: ` prefix. The crate emits `tracing` events at those capture sites
//! and never installs a subscriber.

#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod codec;
pub mod error;
pub mod flow;
pub mod option;
pub mod result;
pub mod safe;

pub use error::{CaughtPanic, CodecError, CodecResult};
pub use option::Option;
pub use result::Result;
