//! Template helper functions for the host evaluator.
//!
//! This crate provides the function layer:
//! - `args`: call-argument normalization shared by every registered function
//! - `collection`: sequence functions (`last`)
//! - `string`: string functions (`strip`)
//! - `registry`: the function table the host evaluator dispatches through

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod collection;
pub mod registry;
pub mod string;

pub use registry::{
    standard_registry, FunctionEntry, FunctionKind, FunctionRegistry, NativeFn,
};
