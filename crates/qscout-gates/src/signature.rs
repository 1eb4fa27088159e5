//! Gate signatures: name, typed parameter list and action.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::argument::GateArg;
use crate::error::{GateError, GateResult};
use crate::family::{BoundGate, FamilyBinding, check_stretch};
use crate::unitary::Unitary;

/// Prefix of the idle twin of an active gate.
pub const IDLE_PREFIX: &str = "I_";

/// Name of the trailing parameter added by the stretch transform.
pub const STRETCH_PARAM: &str = "stretch";

/// Type of a gate parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// A qubit operand.
    Qubit,
    /// A real number.
    Float,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Qubit => write!(f, "qubit"),
            ParamKind::Float => write!(f, "float"),
        }
    }
}

/// A named, typed gate parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as it appears in gate documentation.
    pub name: String,
    /// Parameter type.
    pub kind: ParamKind,
}

impl Parameter {
    /// A qubit parameter.
    pub fn qubit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Qubit,
        }
    }

    /// A float parameter.
    pub fn float(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Float,
        }
    }
}

/// What a gate does when it appears in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GateAction {
    /// A physical gate with a unitary action.
    Active(FamilyBinding),
    /// Occupies the duration of the bound gate without acting on the state.
    Idle(FamilyBinding),
    /// A non-unitary circuit marker (`prepare_all`, `measure_all`).
    Boundary,
}

/// Immutable descriptor of one native gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateSignature {
    name: String,
    parameters: Vec<Parameter>,
    action: GateAction,
}

impl GateSignature {
    /// An active gate.
    pub fn active(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        binding: FamilyBinding,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            action: GateAction::Active(binding),
        }
    }

    /// A boundary marker with no parameters.
    pub fn boundary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            action: GateAction::Boundary,
        }
    }

    /// Gate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered parameter list.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Gate action.
    pub fn action(&self) -> &GateAction {
        &self.action
    }

    /// The family binding of an active or idle gate.
    pub fn binding(&self) -> Option<&FamilyBinding> {
        match &self.action {
            GateAction::Active(b) | GateAction::Idle(b) => Some(b),
            GateAction::Boundary => None,
        }
    }

    /// Whether the gate has a unitary action.
    pub fn is_unitary(&self) -> bool {
        matches!(self.action, GateAction::Active(_))
    }

    /// Whether the gate is an idle twin.
    pub fn is_idle(&self) -> bool {
        matches!(self.action, GateAction::Idle(_))
    }

    /// Boundary gates are busy: they structure the circuit rather than act.
    pub fn is_boundary(&self) -> bool {
        matches!(self.action, GateAction::Boundary)
    }

    /// Number of qubit operands.
    pub fn num_qubits(&self) -> usize {
        self.parameters
            .iter()
            .filter(|p| p.kind == ParamKind::Qubit)
            .count()
    }

    /// The `I_<name>` twin of an active gate; `None` for other gates.
    pub fn idle_twin(&self) -> Option<GateSignature> {
        match &self.action {
            GateAction::Active(binding) => Some(GateSignature {
                name: format!("{IDLE_PREFIX}{}", self.name),
                parameters: self.parameters.clone(),
                action: GateAction::Idle(binding.clone()),
            }),
            _ => None,
        }
    }

    /// The stretched variant of an active gate, named `<name><suffix>`,
    /// with a trailing `stretch` float parameter. `None` for other gates.
    pub fn stretched(&self, suffix: &str) -> Option<GateSignature> {
        match &self.action {
            GateAction::Active(binding) if !binding.is_stretched() => {
                let mut parameters = self.parameters.clone();
                parameters.push(Parameter::float(STRETCH_PARAM));
                Some(GateSignature {
                    name: format!("{}{suffix}", self.name),
                    parameters,
                    action: GateAction::Active(binding.to_stretched()),
                })
            }
            _ => None,
        }
    }

    /// Check call-time arguments against the parameter list and bind them.
    ///
    /// `stretch` is the caller-side duration multiplier; it must be `None`
    /// for stretched gates, which take it from their last argument. Without
    /// either the stretch is 1.
    pub fn bind(&self, args: &[GateArg], stretch: Option<f64>) -> GateResult<BoundGate> {
        let binding = self
            .binding()
            .ok_or_else(|| GateError::NonUnitary(self.name.clone()))?;

        if args.len() != self.parameters.len() {
            return Err(GateError::invalid_argument(
                &self.name,
                format!(
                    "expected {} arguments, got {}",
                    self.parameters.len(),
                    args.len()
                ),
            ));
        }

        let mut floats = Vec::with_capacity(binding.num_float_args());
        for (param, arg) in self.parameters.iter().zip(args) {
            match (param.kind, arg) {
                (ParamKind::Qubit, GateArg::Qubit(_)) => {}
                (ParamKind::Float, GateArg::Angle(expr)) => {
                    let value = expr.to_real().ok_or_else(|| {
                        GateError::invalid_argument(
                            &self.name,
                            format!("'{}' = {expr} is not a finite real number", param.name),
                        )
                    })?;
                    floats.push(value);
                }
                (kind, arg) => {
                    return Err(GateError::invalid_argument(
                        &self.name,
                        format!(
                            "'{}' expects a {kind} argument, got a {}",
                            param.name,
                            arg.kind_name()
                        ),
                    ));
                }
            }
        }

        if floats.len() != binding.num_float_args() {
            return Err(GateError::invalid_argument(
                &self.name,
                format!(
                    "binding takes {} float arguments, signature declares {}",
                    binding.num_float_args(),
                    floats.len()
                ),
            ));
        }

        let (angles, from_args) = binding.fill(&floats);
        let stretch = match (from_args, stretch) {
            (Some(_), Some(_)) => {
                return Err(GateError::invalid_argument(
                    &self.name,
                    "stretch given both as an argument and as an option",
                ));
            }
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };
        check_stretch(&self.name, stretch)?;

        Ok(BoundGate::from_parts(binding.family(), angles, stretch))
    }

    /// The ideal unitary of an active gate for the given arguments.
    pub fn ideal_unitary(&self, args: &[GateArg]) -> GateResult<Unitary> {
        if !self.is_unitary() {
            return Err(GateError::NonUnitary(self.name.clone()));
        }
        Ok(self.bind(args, None)?.ideal_unitary())
    }
}

impl fmt::Display for GateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", p.name, p.kind)?;
        }
        write!(f, ")")
    }
}
