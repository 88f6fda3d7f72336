//! Stochastic Gradient Descent optimizer

use super::optimizer::ensure_same_shape;
use super::Optimizer;
use crate::error::{Error, Result};
use crate::network::Network;

/// Plain SGD: `param -= lr * grad`. Keeps no state between steps.
pub struct SGD {
    lr: f32,
}

impl SGD {
    /// Create a new SGD optimizer
    pub fn new(lr: f32) -> Self {
        Self { lr }
    }
}

impl Default for SGD {
    fn default() -> Self {
        Self::new(1e-4)
    }
}

impl Optimizer for SGD {
    fn step(&mut self, net: &mut Network) -> Result<()> {
        for layer in &mut net.layers {
            for (name, grad) in &layer.grads {
                let param = layer
                    .params
                    .get_mut(name)
                    .ok_or_else(|| Error::UnknownParameter(name.clone()))?;
                ensure_same_shape(name, param, grad)?;

                // param -= lr * grad
                param.scaled_add(-self.lr, grad);
            }
        }
        Ok(())
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
