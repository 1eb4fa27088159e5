//! Noise model configuration.
//!
//! Values come from, in increasing precedence:
//! 1. Built-in defaults
//! 2. A YAML (or JSON) configuration file
//! 3. Environment variables with the `QSCOUT_` prefix

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::{NoiseError, NoiseResult};

/// Environment variable overriding [`NoiseConfig::depolarization`].
pub const ENV_DEPOLARIZATION: &str = "QSCOUT_DEPOLARIZATION";
/// Environment variable overriding [`NoiseConfig::rotation_error`].
pub const ENV_ROTATION_ERROR: &str = "QSCOUT_ROTATION_ERROR";
/// Environment variable overriding [`NoiseConfig::phase_error`].
pub const ENV_PHASE_ERROR: &str = "QSCOUT_PHASE_ERROR";
/// Environment variable overriding [`NoiseConfig::two_qubit_depolarization`].
pub const ENV_TWO_QUBIT_DEPOLARIZATION: &str = "QSCOUT_TWO_QUBIT_DEPOLARIZATION";

/// How depolarization is spread over a multi-qubit register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepolarizingConvention {
    /// Tensor product of single-qubit channels: a Pauli string of weight `w`
    /// decays as `d^w`.
    #[default]
    Product,
    /// Every coherence component decays as `d`, regardless of weight.
    Uniform,
}

impl fmt::Display for DepolarizingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepolarizingConvention::Product => write!(f, "product"),
            DepolarizingConvention::Uniform => write!(f, "uniform"),
        }
    }
}

impl FromStr for DepolarizingConvention {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" | "kron" => Ok(DepolarizingConvention::Product),
            "uniform" => Ok(DepolarizingConvention::Uniform),
            other => Err(NoiseError::InvalidConfig(format!(
                "unknown depolarizing convention '{other}'"
            ))),
        }
    }
}

/// The three physical error rates of the model.
///
/// All rates are per π/2 single-qubit gate time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Depolarization during one π/2 gate.
    #[serde(default = "default_depolarization")]
    pub depolarization: f64,

    /// Over-rotation angle accumulated during one π/2 gate.
    #[serde(default = "default_rotation_error")]
    pub rotation_error: f64,

    /// Offset of the X-Y axis angle for non-Z rotations.
    #[serde(default = "default_phase_error")]
    pub phase_error: f64,

    /// Layout of the depolarizing diagonal on two or more qubits.
    #[serde(default)]
    pub two_qubit_depolarization: DepolarizingConvention,
}

fn default_depolarization() -> f64 {
    1e-3
}

fn default_rotation_error() -> f64 {
    1e-2
}

fn default_phase_error() -> f64 {
    1e-2
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            depolarization: default_depolarization(),
            rotation_error: default_rotation_error(),
            phase_error: default_phase_error(),
            two_qubit_depolarization: DepolarizingConvention::default(),
        }
    }
}

impl NoiseConfig {
    /// A configuration with every error rate set to zero.
    pub fn noiseless() -> Self {
        Self {
            depolarization: 0.0,
            rotation_error: 0.0,
            phase_error: 0.0,
            ..Self::default()
        }
    }

    /// Set the depolarization rate.
    #[must_use]
    pub fn with_depolarization(mut self, depolarization: f64) -> Self {
        self.depolarization = depolarization;
        self
    }

    /// Set the over-rotation rate.
    #[must_use]
    pub fn with_rotation_error(mut self, rotation_error: f64) -> Self {
        self.rotation_error = rotation_error;
        self
    }

    /// Set the axis offset.
    #[must_use]
    pub fn with_phase_error(mut self, phase_error: f64) -> Self {
        self.phase_error = phase_error;
        self
    }

    /// Set the multi-qubit depolarization layout.
    #[must_use]
    pub fn with_two_qubit_depolarization(mut self, convention: DepolarizingConvention) -> Self {
        self.two_qubit_depolarization = convention;
        self
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(contents: &str) -> NoiseResult<Self> {
        let config: NoiseConfig =
            serde_yaml_ng::from_str(contents).map_err(|e| NoiseError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(contents: &str) -> NoiseResult<Self> {
        let config: NoiseConfig =
            serde_json::from_str(contents).map_err(|e| NoiseError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. `.json` files are read as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> NoiseResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| NoiseError::Io(e.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with full precedence: defaults, then the optional
    /// file, then environment variables.
    pub fn load(config_file: Option<&str>) -> NoiseResult<Self> {
        let mut config = match config_file {
            Some(path) => {
                info!("Loading noise configuration from {}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `QSCOUT_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparsable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let rates = [
            (ENV_DEPOLARIZATION, &mut self.depolarization),
            (ENV_ROTATION_ERROR, &mut self.rotation_error),
            (ENV_PHASE_ERROR, &mut self.phase_error),
        ];
        for (key, slot) in rates {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<f64>() {
                    Ok(v) => *slot = v,
                    Err(_) => warn!("Ignoring {}={:?}: not a number", key, raw),
                }
            }
        }

        if let Some(raw) = lookup(ENV_TWO_QUBIT_DEPOLARIZATION) {
            match raw.parse() {
                Ok(v) => self.two_qubit_depolarization = v,
                Err(e) => warn!("Ignoring {}: {}", ENV_TWO_QUBIT_DEPOLARIZATION, e),
            }
        }
    }

    /// Check that the rates describe a physical channel.
    pub fn validate(&self) -> NoiseResult<()> {
        if !(0.0..=1.0).contains(&self.depolarization) {
            return Err(NoiseError::InvalidConfig(format!(
                "depolarization must lie in [0, 1], got {}",
                self.depolarization
            )));
        }
        if !self.rotation_error.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "rotation_error must be finite, got {}",
                self.rotation_error
            )));
        }
        if !self.phase_error.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "phase_error must be finite, got {}",
                self.phase_error
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = NoiseConfig::default();
        assert_eq!(config.depolarization, 1e-3);
        assert_eq!(config.rotation_error, 1e-2);
        assert_eq!(config.phase_error, 1e-2);
        assert_eq!(config.two_qubit_depolarization, DepolarizingConvention::Product);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_document_uses_defaults() {
        let config = NoiseConfig::from_yaml_str("depolarization: 0.005\n").unwrap();
        assert_eq!(config.depolarization, 0.005);
        assert_eq!(config.rotation_error, 1e-2);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = NoiseConfig::default()
            .with_phase_error(0.0)
            .with_two_qubit_depolarization(DepolarizingConvention::Uniform);
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(yaml.contains("two_qubit_depolarization: uniform"));
        assert_eq!(NoiseConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_json() {
        let config = NoiseConfig::from_json_str(r#"{"rotation_error": 0.02}"#).unwrap();
        assert_eq!(config.rotation_error, 0.02);
        assert!(matches!(
            NoiseConfig::from_json_str("{not json"),
            Err(NoiseError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            NoiseConfig::default().with_depolarization(1.5).validate(),
            Err(NoiseError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoiseConfig::default().with_depolarization(-0.1).validate(),
            Err(NoiseError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoiseConfig::default().with_rotation_error(f64::NAN).validate(),
            Err(NoiseError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoiseConfig::from_yaml_str("depolarization: 2.0"),
            Err(NoiseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DEPOLARIZATION, "0.01"),
            (ENV_PHASE_ERROR, "not-a-number"),
            (ENV_TWO_QUBIT_DEPOLARIZATION, "Uniform"),
        ]
        .into_iter()
        .collect();

        let mut config = NoiseConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| (*v).to_string()));

        assert_eq!(config.depolarization, 0.01);
        assert_eq!(config.phase_error, 1e-2);
        assert_eq!(config.two_qubit_depolarization, DepolarizingConvention::Uniform);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            NoiseConfig::from_file("/nonexistent/qscout-noise.yaml"),
            Err(NoiseError::Io(_))
        ));
    }
}
