//! Core types and values for stencil template functions.
//!
//! This crate provides:
//! - [`Value`] - The value type exchanged with the host evaluator
//! - [`Seq`] - Persistent sequence with structural sharing
//! - [`Type`] - Type descriptors for diagnostics
//! - [`Error`] - Error types raised back to the host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod seq;
pub mod types;
pub mod value;

pub use error::{Error, Expectation, Result};
pub use seq::Seq;
pub use types::Type;
pub use value::Value;
