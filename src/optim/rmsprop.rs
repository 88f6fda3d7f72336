//! RMSProp optimizer

use std::collections::HashMap;

use super::optimizer::ensure_same_shape;
use super::Optimizer;
use crate::error::{Error, Result};
use crate::network::{Network, Tensor};

/// RMSProp (Root Mean Square Propagation)
///
/// Divides each update by the root of a decaying average of past squared
/// gradients, so frequently-large coordinates take smaller steps:
///
/// ```text
/// cache = decay * cache + (1 - decay) * grad²
/// param -= lr / √(eps + cache) * grad
/// ```
///
/// The cache is zero-initialized per parameter name on first encounter and
/// persists for the optimizer's lifetime.
pub struct RMSProp {
    lr: f32,
    decay: f32,
    eps: f32,
    cache: HashMap<String, Tensor>,
}

impl RMSProp {
    /// Create a new RMSProp optimizer
    pub fn new(lr: f32, decay: f32, eps: f32) -> Self {
        Self {
            lr,
            decay,
            eps,
            cache: HashMap::new(),
        }
    }

    /// Create RMSProp with default smoothing (decay = 0.99, eps = 1e-8)
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.99, 1e-8)
    }

    /// Squared-gradient running average for `name`, if that parameter has
    /// been stepped.
    pub fn cache(&self, name: &str) -> Option<&Tensor> {
        self.cache.get(name)
    }
}

impl Default for RMSProp {
    fn default() -> Self {
        Self::new(1e-2, 0.99, 1e-8)
    }
}

impl Optimizer for RMSProp {
    fn step(&mut self, net: &mut Network) -> Result<()> {
        for layer in &mut net.layers {
            for (name, grad) in &layer.grads {
                let param = layer
                    .params
                    .get_mut(name)
                    .ok_or_else(|| Error::UnknownParameter(name.clone()))?;
                ensure_same_shape(name, param, grad)?;

                let cache = self
                    .cache
                    .entry(name.clone())
                    .or_insert_with(|| Tensor::zeros(grad.raw_dim()));
                ensure_same_shape(name, cache, grad)?;

                // cache = decay * cache + (1 - decay) * grad²
                *cache *= self.decay;
                cache.scaled_add(1.0 - self.decay, &(grad * grad));

                // param -= lr / √(eps + cache) * grad
                let denom = cache.mapv(|c| (self.eps + c).sqrt());
                *param -= &(grad / &denom * self.lr);
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
