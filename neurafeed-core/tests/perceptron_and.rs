mod common;

use common::{and_targets, boolean_inputs, init_logger, seeded_network};
use neurafeed_core::{NeuraFeedError, TrainingConfig, UpdateRuleKind};

#[test]
fn perceptron_learns_and() -> Result<(), NeuraFeedError> {
    init_logger();
    let config = TrainingConfig::new()
        .with_learning_rate(0.2)
        .with_max_epochs(1000);
    let mut network = seeded_network(7, 2, &[("step", 1)], config)?;
    let inputs = boolean_inputs();
    let targets = and_targets();

    let report = network.train(&inputs, &targets)?;
    assert!(report.converged, "report: {:?}", report);
    assert_eq!(report.final_error, 0.0);
    assert_eq!(network.update_rule(), Some(UpdateRuleKind::Perceptron));

    for (x, t) in inputs.iter().zip(targets.iter()) {
        let out = network.forward(x)?;
        assert_eq!(out[0].round(), t[0], "input {:?}", x);
    }
    Ok(())
}

#[test]
fn perceptron_converges_for_many_seeds() -> Result<(), NeuraFeedError> {
    init_logger();
    for seed in 0..10 {
        let config = TrainingConfig::new().with_max_epochs(1000);
        let mut network = seeded_network(seed, 2, &[("step", 1)], config)?;
        let report = network.train(&boolean_inputs(), &and_targets())?;
        assert!(report.converged, "seed {} report: {:?}", seed, report);
    }
    Ok(())
}
