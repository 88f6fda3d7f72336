//! Parameter store mutated by the optimizers
//!
//! A [`Network`] is an ordered collection of [`Layer`]s. Each layer owns a
//! map of named parameter tensors and a map of gradients keyed by the same
//! names. The surrounding training code writes gradients between steps; an
//! optimizer reads them and updates the matching parameters in place. It
//! never adds or removes parameter names.

use std::collections::HashMap;

use ndarray::ArrayD;

use crate::error::{Error, Result};

/// Dynamic-rank tensor of `f32` values.
pub type Tensor = ArrayD<f32>;

/// A group of named parameters together with their current gradients.
///
/// `grads` holds at most one entry per parameter name, with a shape matching
/// the parameter. Parameters without a recorded gradient are skipped by the
/// optimizers.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// Learnable parameters keyed by name.
    pub params: HashMap<String, Tensor>,
    /// Gradients for the current step, keyed like `params`.
    pub grads: HashMap<String, Tensor>,
}

impl Layer {
    /// Create an empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter under `name`.
    pub fn add_param(&mut self, name: impl Into<String>, value: Tensor) {
        self.params.insert(name.into(), value);
    }

    /// Record the gradient for `name`, replacing any previous one.
    ///
    /// Fails if `name` does not refer to a parameter or if the shapes
    /// disagree.
    pub fn set_grad(&mut self, name: &str, grad: Tensor) -> Result<()> {
        let param = self
            .params
            .get(name)
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))?;
        if param.shape() != grad.shape() {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected: param.shape().to_vec(),
                got: grad.shape().to_vec(),
            });
        }
        self.grads.insert(name.to_string(), grad);
        Ok(())
    }

    /// Shared view of a parameter, if present.
    pub fn param(&self, name: &str) -> Option<&Tensor> {
        self.params.get(name)
    }

    /// Zero every recorded gradient in place.
    pub fn zero_grad(&mut self) {
        for grad in self.grads.values_mut() {
            grad.fill(0.0);
        }
    }
}

/// An ordered collection of layers exposing parameters to an optimizer.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Layers in network order.
    pub layers: Vec<Layer>,
}

impl Network {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Zero every gradient in every layer.
    pub fn zero_grad(&mut self) {
        for layer in &mut self.layers {
            layer.zero_grad();
        }
    }

    /// Total number of parameters across all layers.
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(|l| l.params.len()).sum()
    }
}
