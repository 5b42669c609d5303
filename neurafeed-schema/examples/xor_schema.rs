// Loads a 2-2-1 network from its textual schema, trains it on XOR and prints
// the learned weights back in the same format.
//
// Run with `RUST_LOG=info cargo run -p neurafeed-schema --example xor_schema`.

use neurafeed_core::TrainingConfig;
use neurafeed_schema::{format_network, parse_str};
use std::error::Error;

const SCHEMA: &str = "nome=xor
layer={ nome=hidden activationFunction=logistic inputUnits=2 outputUnits=2 }
layer={ nome=output activationFunction=logistic inputUnits=2 outputUnits=1 }";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let targets = [[0.0], [1.0], [1.0], [0.0]];

    let mut network = parse_str(SCHEMA)?.build()?;
    network.set_config(
        TrainingConfig::new()
            .with_learning_rate(0.5)
            .with_max_epochs(50_000),
    );

    let report = network.train(&inputs, &targets)?;
    println!(
        "Trained '{}' for {} epochs in {:?} (error {:.4}, converged: {})",
        network.name(),
        report.epochs,
        report.elapsed,
        report.final_error,
        report.converged
    );

    for x in &inputs {
        let out = network.forward(x)?;
        println!("{:?} -> {:.3}", x, out[0]);
    }

    println!("\n{}", format_network(&network));
    Ok(())
}
