//! Property-based convergence tests for optimizers
//!
//! These tests validate optimizer correctness using:
//! - Quadratic convergence (convex, optimal solution at origin)
//! - Monotone loss decrease on the same bowl
//! - Determinism across identical runs
//! - State-shape invariants after many steps

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::network::{Layer, Network, Tensor};
    use crate::optim::*;

    fn bowl(values: &[f32]) -> Network {
        let mut layer = Layer::new();
        layer.add_param("w", ndarray::arr1(values).into_dyn());
        let mut net = Network::new();
        net.add_layer(layer);
        net
    }

    /// Run `iterations` steps of descent on f(w) = Σ w² and report whether
    /// every coordinate lands within `threshold` of the optimum.
    fn quadratic_converges<O: Optimizer>(
        mut optimizer: O,
        iterations: usize,
        threshold: f32,
    ) -> bool {
        let mut net = bowl(&[3.0, -2.0, 1.5, -2.5]);

        for _ in 0..iterations {
            // Compute gradient: ∇(w²) = 2w
            let grad = net.layers[0].params["w"].mapv(|w| 2.0 * w);
            net.layers[0].set_grad("w", grad).unwrap();
            optimizer.step(&mut net).unwrap();
        }

        net.layers[0].params["w"].iter().all(|&w| w.abs() < threshold)
    }

    /// Report whether the loss f(w) = w² never increases over the run.
    fn loss_decreases<O: Optimizer>(mut optimizer: O, iterations: usize) -> bool {
        let mut net = bowl(&[10.0]);
        let mut prev_loss = f32::INFINITY;

        for _ in 0..iterations {
            let w = net.layers[0].params["w"][0];
            let loss = w * w;
            if loss > prev_loss + 1e-3 {
                return false;
            }
            prev_loss = loss;

            net.layers[0]
                .set_grad("w", ndarray::arr1(&[2.0 * w]).into_dyn())
                .unwrap();
            optimizer.step(&mut net).unwrap();
        }

        true
    }

    proptest! {
        #[test]
        fn prop_sgd_converges_quadratic(
            lr in 0.01f32..0.5
        ) {
            let optimizer = SGD::new(lr);
            prop_assert!(quadratic_converges(optimizer, 100, 1.0));
        }

        #[test]
        fn prop_momentum_converges_quadratic(
            lr in 0.01f32..0.3,
            momentum in 0.0f32..0.9
        ) {
            let optimizer = MomentumSGD::new(lr, momentum);
            prop_assert!(quadratic_converges(optimizer, 100, 1.0));
        }

        #[test]
        fn prop_rmsprop_converges_quadratic(
            lr in 0.005f32..0.05
        ) {
            let optimizer = RMSProp::default_params(lr);
            prop_assert!(quadratic_converges(optimizer, 200, 1.0));
        }

        #[test]
        fn prop_adam_converges_quadratic(
            lr in 0.05f32..0.5
        ) {
            let optimizer = Adam::default_params(lr);
            prop_assert!(quadratic_converges(optimizer, 100, 1.5));
        }

        #[test]
        fn prop_sgd_loss_decreases(
            lr in 0.01f32..0.3
        ) {
            let optimizer = SGD::new(lr);
            prop_assert!(loss_decreases(optimizer, 50));
        }

        #[test]
        fn prop_adam_loss_decreases(
            lr in 0.01f32..0.3
        ) {
            let optimizer = Adam::default_params(lr);
            prop_assert!(loss_decreases(optimizer, 30));
        }
    }

    #[test]
    fn test_identical_runs_are_identical() {
        let run = || {
            let mut net = bowl(&[4.0, -1.0]);
            let mut adam = Adam::default_params(0.05);
            for _ in 0..25 {
                let grad = net.layers[0].params["w"].mapv(|w| 2.0 * w);
                net.layers[0].set_grad("w", grad).unwrap();
                adam.step(&mut net).unwrap();
            }
            net.layers[0].params["w"].clone()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_state_shapes_match_params_after_many_steps() {
        let mut layer = Layer::new();
        layer.add_param("w", Tensor::zeros(ndarray::IxDyn(&[2, 3])));
        layer.add_param("b", Tensor::zeros(ndarray::IxDyn(&[3])));
        let mut net = Network::new();
        net.add_layer(layer);

        let mut momentum = MomentumSGD::new(0.01, 0.9);
        let mut rmsprop = RMSProp::default_params(0.01);
        let mut adam = Adam::default_params(0.01);

        for _ in 0..10 {
            for name in ["w", "b"] {
                let shape = net.layers[0].params[name].raw_dim();
                net.layers[0].set_grad(name, Tensor::ones(shape)).unwrap();
            }
            momentum.step(&mut net).unwrap();
            rmsprop.step(&mut net).unwrap();
            adam.step(&mut net).unwrap();
        }

        for name in ["w", "b"] {
            let shape = net.layers[0].params[name].shape();
            assert_eq!(momentum.velocity(name).unwrap().shape(), shape);
            assert_eq!(rmsprop.cache(name).unwrap().shape(), shape);
            assert_eq!(adam.first_moment(name).unwrap().shape(), shape);
            assert_eq!(adam.second_moment(name).unwrap().shape(), shape);
        }
    }
}
