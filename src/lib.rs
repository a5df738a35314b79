//! Stencil - template helper functions for a configuration-management evaluator
//!
//! This crate re-exports both layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: stencil_functions  — last/strip natives, registry, call adapter
//! Layer 0: stencil_foundation — Core types (Value, Seq, Type, Error)
//! ```

pub use stencil_foundation as foundation;
pub use stencil_functions as functions;
