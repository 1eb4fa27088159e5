//! Name-keyed gate registries.
//!
//! A [`GateRegistry`] is built once and then only read. Lookups are by exact
//! name; there are no aliases and no fallback.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::argument::GateArg;
use crate::error::{GateError, GateResult};
use crate::signature::GateSignature;
use crate::unitary::Unitary;

/// Suffix used for the standard stretched gate set.
pub const STRETCH_SUFFIX: &str = "_stretched";

/// An ordered collection of gate signatures with unique names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GateRegistry {
    gates: Vec<GateSignature>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl GateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from signatures, rejecting duplicate names.
    pub fn from_signatures(signatures: impl IntoIterator<Item = GateSignature>) -> GateResult<Self> {
        let mut registry = Self::new();
        for sig in signatures {
            registry.insert(sig)?;
        }
        Ok(registry)
    }

    /// Add a gate. Fails if the name is taken.
    pub fn insert(&mut self, signature: GateSignature) -> GateResult<()> {
        if self.index.contains_key(signature.name()) {
            return Err(GateError::DuplicateGate(signature.name().to_string()));
        }
        self.index
            .insert(signature.name().to_string(), self.gates.len());
        self.gates.push(signature);
        Ok(())
    }

    /// Add every gate of `other`. Fails on the first name clash, leaving
    /// the gates before it inserted.
    pub fn extend_from(&mut self, other: &GateRegistry) -> GateResult<()> {
        for sig in other.iter() {
            self.insert(sig.clone())?;
        }
        Ok(())
    }

    /// Look up a gate by exact name.
    pub fn get(&self, name: &str) -> GateResult<&GateSignature> {
        self.index
            .get(name)
            .map(|&i| &self.gates[i])
            .ok_or_else(|| GateError::UnknownGate(name.to_string()))
    }

    /// Whether a gate with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the registry has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// All gates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GateSignature> {
        self.gates.iter()
    }

    /// Gate names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(GateSignature::name)
    }

    /// Gates with a unitary action.
    pub fn active(&self) -> impl Iterator<Item = &GateSignature> {
        self.gates.iter().filter(|g| g.is_unitary())
    }

    /// Idle twins.
    pub fn idle(&self) -> impl Iterator<Item = &GateSignature> {
        self.gates.iter().filter(|g| g.is_idle())
    }

    /// Boundary markers.
    pub fn boundary(&self) -> impl Iterator<Item = &GateSignature> {
        self.gates.iter().filter(|g| g.is_boundary())
    }

    /// Ideal unitary of the named gate.
    pub fn ideal_unitary(&self, name: &str, args: &[GateArg]) -> GateResult<Unitary> {
        self.get(name)?.ideal_unitary(args)
    }

    /// A new registry with the idle twin of every active gate appended.
    pub fn with_idle_twins(&self) -> GateResult<GateRegistry> {
        let mut out = self.clone();
        for twin in self.active().filter_map(GateSignature::idle_twin) {
            out.insert(twin)?;
        }
        Ok(out)
    }

    /// The stretched gate set: one `<name><suffix>` gate per active gate,
    /// taking a trailing `stretch` argument. Idle and boundary gates are
    /// left out. `self` is not modified.
    pub fn stretched(&self, suffix: &str) -> GateResult<GateRegistry> {
        let registry =
            GateRegistry::from_signatures(self.active().filter_map(|g| g.stretched(suffix)))?;
        debug!(
            "Stretched {} gates with suffix '{}'",
            registry.len(),
            suffix
        );
        Ok(registry)
    }
}

impl<'a> IntoIterator for &'a GateRegistry {
    type Item = &'a GateSignature;
    type IntoIter = std::slice::Iter<'a, GateSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
