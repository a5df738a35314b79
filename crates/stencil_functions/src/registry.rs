//! The function table the host evaluator dispatches through.
//!
//! The registry is populated once at startup and never mutated per-call.
//! Hosts either build their own [`FunctionRegistry`] or use the process-wide
//! [`standard_registry`].

use std::collections::HashMap;
use std::sync::OnceLock;

use stencil_foundation::{Error, Result, Value};

use crate::args;
use crate::collection;
use crate::string;

/// A native function callable from the host evaluator.
pub type NativeFn = fn(&[Value]) -> Result<Value>;

/// How the host treats a function's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    /// Value-returning function, usable wherever the host expects a value.
    Value,
    /// Statement function, invoked for effect at statement position.
    Statement,
}

/// A registered function with its host-facing metadata.
#[derive(Clone)]
pub struct FunctionEntry {
    /// Name the host resolves the function under.
    pub name: &'static str,
    /// Whether the function returns a value or is a statement.
    pub kind: FunctionKind,
    /// Documentation surfaced by the host's function reference.
    pub doc: &'static str,
    /// The implementation.
    pub func: NativeFn,
}

impl std::fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Registry mapping function names to entries.
///
/// Lookup is by exact name. Dispatching through [`FunctionRegistry::call`]
/// also performs the call-argument normalization from [`crate::args`], so
/// registered functions always receive a flat argument list.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    entries: HashMap<&'static str, FunctionEntry>,
}

impl FunctionRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry pre-populated with the shipped functions.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for entry in [
            FunctionEntry {
                name: "last",
                kind: FunctionKind::Value,
                doc: collection::LAST_DOC,
                func: collection::native_last,
            },
            FunctionEntry {
                name: "strip",
                kind: FunctionKind::Value,
                doc: string::STRIP_DOC,
                func: string::native_strip,
            },
        ] {
            registry.entries.insert(entry.name, entry);
        }
        registry
    }

    /// Registers a function entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFunction`] if the name is already taken.
    pub fn register(&mut self, entry: FunctionEntry) -> Result<()> {
        if self.entries.contains_key(entry.name) {
            return Err(Error::duplicate_function(entry.name));
        }
        self.entries.insert(entry.name, entry);
        Ok(())
    }

    /// Looks up a function entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.get(name)
    }

    /// Returns true if a function with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered function names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no functions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves and invokes a function with host-delivered arguments.
    ///
    /// Normalizes the call-wrapping artifact once here, then dispatches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for an unregistered name, or
    /// whatever error the function itself raises.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::unknown_function(name))?;
        let normalized = args::normalize(args);
        (entry.func)(&normalized)
    }
}

/// Returns the process-wide standard registry.
///
/// Populated on first use, immutable thereafter.
pub fn standard_registry() -> &'static FunctionRegistry {
    static REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FunctionRegistry::standard)
}
