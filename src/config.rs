//! Declarative optimizer configuration
//!
//! Mirrors the constructors of the four optimizers as a flat,
//! serde-deserializable struct, e.g. from YAML:
//!
//! ```yaml
//! name: adam
//! lr: 0.001
//! betas: [0.9, 0.999]
//! eps: 1.0e-8
//! ```
//!
//! Absent fields fall back to each optimizer's documented defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::optim::{Adam, MomentumSGD, Optimizer, RMSProp, SGD};

/// Optimizer names accepted by [`OptimizerConfig`].
pub const VALID_OPTIMIZERS: &[&str] = &["sgd", "momentum_sgd", "rmsprop", "adam"];

/// Optimizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Optimizer name (sgd, momentum_sgd, rmsprop, adam)
    pub name: String,

    /// Learning rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lr: Option<f32>,

    /// Momentum coefficient (momentum_sgd)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub momentum: Option<f32>,

    /// Squared-gradient decay rate (rmsprop)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay: Option<f32>,

    /// Moment coefficients (adam)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub betas: Option<Vec<f32>>,

    /// Numerical-stability epsilon (rmsprop, adam)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eps: Option<f32>,
}

impl OptimizerConfig {
    /// Configuration naming an optimizer, every hyperparameter defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lr: None,
            momentum: None,
            decay: None,
            betas: None,
            eps: None,
        }
    }

    /// Validate field ranges without building.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.to_lowercase();
        if !VALID_OPTIMIZERS.contains(&name.as_str()) {
            return Err(Error::Config(format!(
                "Unknown optimizer '{}'. Valid options: {:?}",
                self.name, VALID_OPTIMIZERS
            )));
        }

        if let Some(lr) = self.lr {
            if lr <= 0.0 {
                return Err(Error::Config(format!("optimizer.lr must be > 0, got {lr}")));
            }
        }

        if let Some(momentum) = self.momentum {
            if !(0.0..1.0).contains(&momentum) {
                return Err(Error::Config(format!(
                    "optimizer.momentum must be in [0, 1), got {momentum}"
                )));
            }
        }

        if let Some(decay) = self.decay {
            if decay <= 0.0 || decay >= 1.0 {
                return Err(Error::Config(format!(
                    "optimizer.decay must be in (0, 1), got {decay}"
                )));
            }
        }

        if let Some(ref betas) = self.betas {
            if betas.len() != 2 {
                return Err(Error::Config(format!(
                    "optimizer.betas must hold exactly two values, got {}",
                    betas.len()
                )));
            }
            for (i, beta) in betas.iter().enumerate() {
                if *beta <= 0.0 || *beta >= 1.0 {
                    return Err(Error::Config(format!(
                        "optimizer.betas[{i}] must be in (0, 1), got {beta}"
                    )));
                }
            }
        }

        if let Some(eps) = self.eps {
            if eps <= 0.0 {
                return Err(Error::Config(format!(
                    "optimizer.eps must be > 0, got {eps}"
                )));
            }
        }

        Ok(())
    }

    /// Validate and construct the configured optimizer.
    pub fn build(&self) -> Result<Box<dyn Optimizer>> {
        self.validate()?;

        let opt: Box<dyn Optimizer> = match self.name.to_lowercase().as_str() {
            "sgd" => Box::new(SGD::new(self.lr.unwrap_or(1e-4))),
            "momentum_sgd" => Box::new(MomentumSGD::new(
                self.lr.unwrap_or(1e-4),
                self.momentum.unwrap_or(0.0),
            )),
            "rmsprop" => Box::new(RMSProp::new(
                self.lr.unwrap_or(1e-2),
                self.decay.unwrap_or(0.99),
                self.eps.unwrap_or(1e-8),
            )),
            "adam" => {
                let betas = self.betas.as_deref().unwrap_or(&[0.9, 0.999]);
                Box::new(Adam::new(
                    self.lr.unwrap_or(1e-3),
                    betas[0],
                    betas[1],
                    self.eps.unwrap_or(1e-8),
                ))
            }
            other => {
                return Err(Error::Config(format!("Unknown optimizer '{other}'")));
            }
        };

        Ok(opt)
    }
}
