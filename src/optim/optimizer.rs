//! Optimizer trait

use crate::error::{Error, Result};
use crate::network::{Network, Tensor};

/// Trait for optimization algorithms
///
/// A step walks every layer of the network and, for each recorded gradient,
/// applies the algorithm's update rule to the parameter of the same name.
/// Implementations must override [`step`](Optimizer::step); the provided
/// body is the unconfigured base behavior and always fails with
/// [`Error::Unimplemented`].
pub trait Optimizer {
    /// Perform a single optimization step over `net`
    fn step(&mut self, net: &mut Network) -> Result<()> {
        let _ = net;
        Err(Error::Unimplemented("step"))
    }

    /// Zero out all recorded gradients
    fn zero_grad(&mut self, net: &mut Network) {
        net.zero_grad();
    }

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}

/// Reject a gradient whose shape disagrees with the tensor it updates.
///
/// `expected` is the parameter or state tensor already associated with
/// `name`; updates must fail loudly rather than broadcast or truncate.
pub(crate) fn ensure_same_shape(name: &str, expected: &Tensor, got: &Tensor) -> Result<()> {
    if expected.shape() != got.shape() {
        return Err(Error::ShapeMismatch {
            name: name.to_string(),
            expected: expected.shape().to_vec(),
            got: got.shape().to_vec(),
        });
    }
    Ok(())
}
