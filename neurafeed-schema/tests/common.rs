use neurafeed_core::nn::Layer;
use neurafeed_core::Network;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A seeded 2-2-1 logistic network with weights in `[0, 1)`.
#[allow(dead_code)]
pub fn random_xor_network(seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::new("xor");
    network
        .add_layer(Layer::random("hidden", "logistic", 2, 2, &mut rng))
        .expect("hidden layer");
    network
        .add_layer(Layer::random("output", "logistic", 2, 1, &mut rng))
        .expect("output layer");
    network
}
