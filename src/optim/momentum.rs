//! SGD with momentum

use std::collections::HashMap;

use super::optimizer::ensure_same_shape;
use super::Optimizer;
use crate::error::{Error, Result};
use crate::network::{Network, Tensor};

/// SGD with a velocity buffer per parameter
///
/// The velocity follows `v = momentum * v - lr * grad` and is added to the
/// parameter. Buffers are zero-initialized the first time a parameter name
/// is seen and persist for the optimizer's lifetime. They are keyed by name
/// alone, so a name reused across layers shares one buffer.
pub struct MomentumSGD {
    lr: f32,
    momentum: f32,
    velocity: HashMap<String, Tensor>,
}

impl MomentumSGD {
    /// Create a new momentum optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self {
            lr,
            momentum,
            velocity: HashMap::new(),
        }
    }

    /// Velocity buffer for `name`, if that parameter has been stepped.
    pub fn velocity(&self, name: &str) -> Option<&Tensor> {
        self.velocity.get(name)
    }
}

impl Default for MomentumSGD {
    fn default() -> Self {
        Self::new(1e-4, 0.0)
    }
}

impl Optimizer for MomentumSGD {
    fn step(&mut self, net: &mut Network) -> Result<()> {
        for layer in &mut net.layers {
            for (name, grad) in &layer.grads {
                let param = layer
                    .params
                    .get_mut(name)
                    .ok_or_else(|| Error::UnknownParameter(name.clone()))?;
                ensure_same_shape(name, param, grad)?;

                let velocity = self
                    .velocity
                    .entry(name.clone())
                    .or_insert_with(|| Tensor::zeros(grad.raw_dim()));
                ensure_same_shape(name, velocity, grad)?;

                // v = momentum * v - lr * grad
                *velocity *= self.momentum;
                velocity.scaled_add(-self.lr, grad);

                // param += v
                *param += &*velocity;
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
