//! Name-keyed access to the noise model, as an emulator sees it.

use qscout_gates::{
    BoundGate, GateAction, GateArg, GateError, GateRegistry, GateSignature, QubitId, all_gates,
};
use tracing::info;

use crate::config::NoiseConfig;
use crate::error::NoiseResult;
use crate::model::NoiseModel;
use crate::pauli::Superoperator;

/// Per-call options for [`NoisyGateSet`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Duration multiplier. `None` means 1, or the trailing argument of a
    /// stretched gate.
    pub stretch: Option<f64>,
    /// Target qubits for multi-location evaluation. Only the whole-register
    /// form (`None` or empty) is supported.
    pub locations: Option<Vec<QubitId>>,
}

impl CallOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration multiplier.
    #[must_use]
    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Set the target locations.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<QubitId>) -> Self {
        self.locations = Some(locations);
        self
    }

    fn check_locations(&self) -> NoiseResult<()> {
        match &self.locations {
            Some(locs) if !locs.is_empty() => Err(GateError::NotImplemented(format!(
                "evaluation at explicit locations ({} given)",
                locs.len()
            ))
            .into()),
            _ => Ok(()),
        }
    }
}

/// A gate registry paired with the noise model that evaluates it.
#[derive(Debug, Clone)]
pub struct NoisyGateSet {
    registry: GateRegistry,
    model: NoiseModel,
}

impl NoisyGateSet {
    /// Pair a registry with a model.
    pub fn new(registry: GateRegistry, model: NoiseModel) -> Self {
        Self { registry, model }
    }

    /// The full QSCOUT emulator gate set under `config`.
    pub fn qscout(config: NoiseConfig) -> NoiseResult<Self> {
        let registry = all_gates()?;
        let model = NoiseModel::new(config)?;
        info!("Built QSCOUT noisy gate set with {} gates", registry.len());
        Ok(Self::new(registry, model))
    }

    /// The gate registry.
    pub fn registry(&self) -> &GateRegistry {
        &self.registry
    }

    /// The noise model.
    pub fn model(&self) -> &NoiseModel {
        &self.model
    }

    /// Gate duration with default options.
    pub fn duration(&self, name: &str, args: &[GateArg]) -> NoiseResult<f64> {
        self.duration_with(name, args, &CallOptions::default())
    }

    /// Gate duration.
    ///
    /// Idle twins report the duration of the gate they stand in for.
    pub fn duration_with(
        &self,
        name: &str,
        args: &[GateArg],
        options: &CallOptions,
    ) -> NoiseResult<f64> {
        let (_, bound) = self.resolve(name, args, options)?;
        Ok(self.model.duration(&bound))
    }

    /// Noisy superoperator with default options.
    pub fn superoperator(&self, name: &str, args: &[GateArg]) -> NoiseResult<Superoperator> {
        self.superoperator_with(name, args, &CallOptions::default())
    }

    /// Noisy superoperator.
    ///
    /// An idle twin yields the idle channel on its qubits for the twin
    /// gate's duration.
    pub fn superoperator_with(
        &self,
        name: &str,
        args: &[GateArg],
        options: &CallOptions,
    ) -> NoiseResult<Superoperator> {
        let (signature, bound) = self.resolve(name, args, options)?;
        match signature.action() {
            GateAction::Idle(_) => self
                .model
                .idle_qubits(bound.family().num_qubits(), self.model.duration(&bound)),
            _ => self.model.superoperator(&bound),
        }
    }

    /// Background decoherence of one idle qubit.
    pub fn idle(&self, duration: f64) -> NoiseResult<Superoperator> {
        self.model.idle(duration)
    }

    fn resolve(
        &self,
        name: &str,
        args: &[GateArg],
        options: &CallOptions,
    ) -> NoiseResult<(&GateSignature, BoundGate)> {
        options.check_locations()?;
        let signature = self.registry.get(name)?;
        let bound = signature.bind(args, options.stretch)?;
        Ok((signature, bound))
    }
}

/// The full QSCOUT emulator gate set: native and two-qubit gates, their
/// idle twins and the stretched variants of every active gate.
pub fn qscout_gate_set(config: NoiseConfig) -> NoiseResult<NoisyGateSet> {
    NoisyGateSet::qscout(config)
}
