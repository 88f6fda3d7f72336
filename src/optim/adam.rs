//! Adam optimizer

use std::collections::HashMap;

use super::optimizer::ensure_same_shape;
use super::Optimizer;
use crate::error::{Error, Result};
use crate::network::{Network, Tensor};

/// Adam optimizer (Adaptive Moment Estimation)
///
/// Tracks bias-corrected estimates of the first and second gradient moments
/// per parameter:
///
/// ```text
/// m = β1 * m + (1 - β1) * grad
/// v = β2 * v + (1 - β2) * grad²
/// m̂ = m / (1 - β1^t)
/// v̂ = v / (1 - β2^t)
/// param -= lr / (eps + √v̂) * m̂
/// ```
///
/// The step counter `t` is global to the instance: it advances exactly once
/// per [`step`](Optimizer::step) call, before any parameter is visited, no
/// matter how many parameters the network holds. Moment buffers are
/// zero-initialized per parameter name on first encounter; the bias
/// correction compensates for that zero start early in training.
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    eps: f32,
    t: u64,
    mt: HashMap<String, Tensor>,
    vt: HashMap<String, Tensor>,
}

impl Adam {
    /// Create a new Adam optimizer
    pub fn new(lr: f32, beta1: f32, beta2: f32, eps: f32) -> Self {
        Self {
            lr,
            beta1,
            beta2,
            eps,
            t: 0,
            mt: HashMap::new(),
            vt: HashMap::new(),
        }
    }

    /// Create Adam with default moment coefficients (β1 = 0.9, β2 = 0.999, eps = 1e-8)
    pub fn default_params(lr: f32) -> Self {
        Self::new(lr, 0.9, 0.999, 1e-8)
    }

    /// Start the step counter at `t` instead of zero.
    pub fn with_step_count(mut self, t: u64) -> Self {
        self.t = t;
        self
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> u64 {
        self.t
    }

    /// First-moment estimate for `name`, if that parameter has been stepped.
    pub fn first_moment(&self, name: &str) -> Option<&Tensor> {
        self.mt.get(name)
    }

    /// Second-moment estimate for `name`, if that parameter has been stepped.
    pub fn second_moment(&self, name: &str) -> Option<&Tensor> {
        self.vt.get(name)
    }
}

impl Default for Adam {
    fn default() -> Self {
        Self::new(1e-3, 0.9, 0.999, 1e-8)
    }
}

impl Optimizer for Adam {
    fn step(&mut self, net: &mut Network) -> Result<()> {
        // One tick per call, before any parameter loop.
        self.t += 1;
        let correction1 = 1.0 - self.beta1.powi(self.t as i32);
        let correction2 = 1.0 - self.beta2.powi(self.t as i32);

        for layer in &mut net.layers {
            for (name, grad) in &layer.grads {
                let param = layer
                    .params
                    .get_mut(name)
                    .ok_or_else(|| Error::UnknownParameter(name.clone()))?;
                ensure_same_shape(name, param, grad)?;

                let mt = self
                    .mt
                    .entry(name.clone())
                    .or_insert_with(|| Tensor::zeros(grad.raw_dim()));
                ensure_same_shape(name, mt, grad)?;

                // m = β1 * m + (1 - β1) * grad
                *mt *= self.beta1;
                mt.scaled_add(1.0 - self.beta1, grad);

                let vt = self
                    .vt
                    .entry(name.clone())
                    .or_insert_with(|| Tensor::zeros(grad.raw_dim()));
                ensure_same_shape(name, vt, grad)?;

                // v = β2 * v + (1 - β2) * grad²
                *vt *= self.beta2;
                vt.scaled_add(1.0 - self.beta2, &(grad * grad));

                // param -= lr / (eps + √v̂) * m̂
                let m_hat = &*mt / correction1;
                let v_hat = &*vt / correction2;
                let denom = v_hat.mapv(f32::sqrt) + self.eps;
                *param -= &(&m_hat / &denom * self.lr);
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
