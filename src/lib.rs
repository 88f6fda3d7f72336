//! # Ajustar: Gradient-Based Parameter Updates
//!
//! Ajustar implements the update rules used to train a neural network's
//! learnable parameters: SGD, SGD with momentum, RMSProp, and Adam. Each
//! optimizer walks a [`Network`] of named parameter tensors and applies its
//! rule using gradients recorded by the surrounding training code.
//!
//! ## Architecture
//!
//! - **network**: Parameter store (layers of named tensors plus gradients)
//! - **optim**: Optimizers (SGD, MomentumSGD, RMSProp, Adam)
//! - **config**: Declarative optimizer configuration
//!
//! ## Example
//!
//! ```
//! use ajustar::{Layer, Network, Optimizer, SGD};
//! use ndarray::arr1;
//!
//! let mut layer = Layer::new();
//! layer.add_param("w", arr1(&[1.0f32]).into_dyn());
//! let mut net = Network::new();
//! net.add_layer(layer);
//!
//! // Gradients are computed externally and recorded before each step.
//! net.layers[0].set_grad("w", arr1(&[2.0f32]).into_dyn())?;
//!
//! let mut optimizer = SGD::new(0.1);
//! optimizer.step(&mut net)?;
//!
//! assert!((net.layers[0].params["w"][0] - 0.8).abs() < 1e-6);
//! # Ok::<(), ajustar::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod optim;

// Re-export commonly used types
pub use config::OptimizerConfig;
pub use error::{Error, Result};
pub use network::{Layer, Network, Tensor};
pub use optim::{Adam, MomentumSGD, Optimizer, RMSProp, SGD};
