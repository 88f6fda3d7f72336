//! Optimizers for training neural networks

mod adam;
mod momentum;
mod optimizer;
mod rmsprop;
mod sgd;

#[cfg(test)]
mod convergence_tests;

pub use adam::Adam;
pub use momentum::MomentumSGD;
pub use optimizer::Optimizer;
pub use rmsprop::RMSProp;
pub use sgd::SGD;
