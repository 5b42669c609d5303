mod common;

use common::{and_targets, boolean_inputs, init_logger, seeded_network, xor_targets};
use neurafeed_core::{NeuraFeedError, TrainingConfig, UpdateRuleKind};

fn max_error(network: &mut neurafeed_core::Network) -> Result<f64, NeuraFeedError> {
    let mut worst: f64 = 0.0;
    for (x, t) in boolean_inputs().iter().zip(xor_targets().iter()) {
        let out = network.forward(x)?;
        worst = worst.max((out[0] - t[0]).abs());
    }
    Ok(worst)
}

#[test]
fn backprop_learns_xor() -> Result<(), NeuraFeedError> {
    init_logger();
    // Plain gradient descent can settle in a local minimum for an unlucky
    // initialisation, so a few seeds are tried.
    let mut best = f64::INFINITY;
    for seed in 0..10 {
        let config = TrainingConfig::new()
            .with_learning_rate(0.5)
            .with_max_epochs(20_000);
        let mut network =
            seeded_network(seed, 2, &[("logistic", 2), ("logistic", 1)], config)?;
        network.train(&boolean_inputs(), &xor_targets())?;
        assert_eq!(
            network.update_rule(),
            Some(UpdateRuleKind::MultiLayerBackprop)
        );
        best = best.min(max_error(&mut network)?);
        if best < 0.1 {
            break;
        }
    }
    assert!(best < 0.1, "no seed fitted XOR, best max error {}", best);
    Ok(())
}

#[test]
fn backprop_reduces_error_on_and() -> Result<(), NeuraFeedError> {
    init_logger();
    let mut network = seeded_network(
        42,
        2,
        &[("tanh", 3), ("logistic", 1)],
        TrainingConfig::new().with_learning_rate(0.3).with_max_epochs(1),
    )?;
    let first = network.train(&boolean_inputs(), &and_targets())?;

    network.set_config(TrainingConfig::new().with_learning_rate(0.3).with_max_epochs(2000));
    let later = network.train(&boolean_inputs(), &and_targets())?;
    assert!(
        later.final_error < first.final_error,
        "error went from {} to {}",
        first.final_error,
        later.final_error
    );
    Ok(())
}
