use neurafeed_core::nn::Layer;
use neurafeed_core::{NeuraFeedError, Network, TrainingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Each test binary uses a different subset of these helpers.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn boolean_inputs() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]
}

#[allow(dead_code)]
pub fn and_targets() -> Vec<Vec<f64>> {
    vec![vec![0.0], vec![0.0], vec![0.0], vec![1.0]]
}

#[allow(dead_code)]
pub fn xor_targets() -> Vec<Vec<f64>> {
    vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]]
}

/// Builds a fully connected network of random layers, one per `(activation,
/// units)` pair, seeded for reproducibility.
#[allow(dead_code)]
pub fn seeded_network(
    seed: u64,
    input_arity: usize,
    layers: &[(&str, usize)],
    config: TrainingConfig,
) -> Result<Network, NeuraFeedError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::with_config("test", config);
    let mut arity = input_arity;
    for (i, (activation, units)) in layers.iter().enumerate() {
        let name = format!("layer{}", i);
        network.add_layer(Layer::random(&name, activation, arity, *units, &mut rng))?;
        arity = *units;
    }
    Ok(network)
}
