//! Error types for the operate crates
//!
//! Every failure the loop can hit is an `OperateError`. The loop treats all of
//! them as terminal for the current objective; expected control outcomes
//! (a finished objective, an unknown operation) are `Directive` values instead.

mod constructors;
mod conversions;
mod types;

pub use types::{OperateError, OperateResult};
