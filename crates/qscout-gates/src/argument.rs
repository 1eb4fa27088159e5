//! Call-time gate arguments.
//!
//! Angles are carried as [`AngleExpr`] so a circuit layer can hand over
//! unresolved expressions (`pi / 2`, `-theta`). Only expressions that reduce
//! to a finite real can drive a gate model.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::qubit::QubitId;

/// A real-valued angle expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AngleExpr {
    /// A literal angle in radians.
    Value(f64),
    /// The constant π.
    Pi,
    /// An unbound named angle.
    Named(String),
    /// Negation.
    Neg(Box<AngleExpr>),
    /// Sum of two angles.
    Sum(Box<AngleExpr>, Box<AngleExpr>),
    /// Product of two expressions.
    Product(Box<AngleExpr>, Box<AngleExpr>),
    /// Quotient of two expressions.
    Quotient(Box<AngleExpr>, Box<AngleExpr>),
}

impl AngleExpr {
    /// A literal angle.
    pub fn value(radians: f64) -> Self {
        AngleExpr::Value(radians)
    }

    /// An unbound named angle.
    pub fn named(name: impl Into<String>) -> Self {
        AngleExpr::Named(name.into())
    }

    /// Whether the expression still refers to an unbound name.
    pub fn is_symbolic(&self) -> bool {
        match self {
            AngleExpr::Named(_) => true,
            AngleExpr::Value(_) | AngleExpr::Pi => false,
            AngleExpr::Neg(e) => e.is_symbolic(),
            AngleExpr::Sum(a, b) | AngleExpr::Product(a, b) | AngleExpr::Quotient(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Evaluate to a finite real, if possible.
    ///
    /// Returns `None` for unbound names, division by zero and any
    /// non-finite intermediate.
    pub fn to_real(&self) -> Option<f64> {
        let v = match self {
            AngleExpr::Value(v) => *v,
            AngleExpr::Pi => PI,
            AngleExpr::Named(_) => return None,
            AngleExpr::Neg(e) => -e.to_real()?,
            AngleExpr::Sum(a, b) => a.to_real()? + b.to_real()?,
            AngleExpr::Product(a, b) => a.to_real()? * b.to_real()?,
            AngleExpr::Quotient(a, b) => {
                let divisor = b.to_real()?;
                if divisor == 0.0 {
                    return None;
                }
                a.to_real()? / divisor
            }
        };
        v.is_finite().then_some(v)
    }

    /// Replace every occurrence of `name` with a literal angle.
    pub fn bind(&self, name: &str, radians: f64) -> Self {
        match self {
            AngleExpr::Named(n) if n == name => AngleExpr::Value(radians),
            AngleExpr::Value(_) | AngleExpr::Pi | AngleExpr::Named(_) => self.clone(),
            AngleExpr::Neg(e) => AngleExpr::Neg(Box::new(e.bind(name, radians))),
            AngleExpr::Sum(a, b) => {
                AngleExpr::Sum(Box::new(a.bind(name, radians)), Box::new(b.bind(name, radians)))
            }
            AngleExpr::Product(a, b) => AngleExpr::Product(
                Box::new(a.bind(name, radians)),
                Box::new(b.bind(name, radians)),
            ),
            AngleExpr::Quotient(a, b) => AngleExpr::Quotient(
                Box::new(a.bind(name, radians)),
                Box::new(b.bind(name, radians)),
            ),
        }
    }
}

impl fmt::Display for AngleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleExpr::Value(v) => write!(f, "{v}"),
            AngleExpr::Pi => write!(f, "pi"),
            AngleExpr::Named(name) => write!(f, "{name}"),
            AngleExpr::Neg(e) => write!(f, "-({e})"),
            AngleExpr::Sum(a, b) => write!(f, "({a} + {b})"),
            AngleExpr::Product(a, b) => write!(f, "({a} * {b})"),
            AngleExpr::Quotient(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for AngleExpr {
    fn from(radians: f64) -> Self {
        AngleExpr::Value(radians)
    }
}

impl std::ops::Add for AngleExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        AngleExpr::Sum(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for AngleExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        AngleExpr::Product(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for AngleExpr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        AngleExpr::Quotient(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for AngleExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        AngleExpr::Neg(Box::new(self))
    }
}

/// One bound argument of a gate call, in declared parameter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateArg {
    /// A qubit operand.
    Qubit(QubitId),
    /// A real-valued argument (angle or stretch factor).
    Angle(AngleExpr),
}

impl GateArg {
    /// Short label for the argument kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GateArg::Qubit(_) => "qubit",
            GateArg::Angle(_) => "float",
        }
    }
}

impl fmt::Display for GateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateArg::Qubit(q) => write!(f, "{q}"),
            GateArg::Angle(a) => write!(f, "{a}"),
        }
    }
}

impl From<QubitId> for GateArg {
    fn from(q: QubitId) -> Self {
        GateArg::Qubit(q)
    }
}

impl From<f64> for GateArg {
    fn from(radians: f64) -> Self {
        GateArg::Angle(AngleExpr::Value(radians))
    }
}

impl From<AngleExpr> for GateArg {
    fn from(angle: AngleExpr) -> Self {
        GateArg::Angle(angle)
    }
}
