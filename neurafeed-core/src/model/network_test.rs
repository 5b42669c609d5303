use super::*;
use crate::nn::Neuron;
use crate::utils::testing::{check_vec_near, layer_from_rows};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn two_two_one(seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::new("xor");
    network
        .add_layer(Layer::random("hidden", "logistic", 2, 2, &mut rng))
        .unwrap();
    network
        .add_layer(Layer::random("output", "logistic", 2, 1, &mut rng))
        .unwrap();
    network
}

#[test]
fn test_new_network_defaults() {
    let network = Network::new("empty");
    assert_eq!(network.name(), "empty");
    assert_eq!(network.layer_count(), 0);
    assert_eq!(network.input_arity(), 0);
    assert_eq!(network.output_units(), 0);
    assert_eq!(network.learning_rate(), 0.2);
    assert_eq!(network.update_rule(), None);
}

#[test]
fn test_forward_empty_network_fails() {
    let mut network = Network::new("empty");
    assert_eq!(network.forward(&[1.0]), Err(NeuraFeedError::EmptyNetwork));
}

#[test]
fn test_forward_single_identity_neuron_is_identity() -> Result<(), NeuraFeedError> {
    let mut network = Network::new("id");
    network.add_layer(layer_from_rows("only", "identity", &[&[1.0, 0.0]])?)?;
    for x in [-3.5, 0.0, 0.25, 42.0] {
        assert_eq!(network.forward(&[x])?, vec![x]);
    }
    Ok(())
}

#[test]
fn test_forward_chains_layers() -> Result<(), NeuraFeedError> {
    let mut network = Network::new("chain");
    network.add_layer(layer_from_rows(
        "hidden",
        "identity",
        &[&[0.5, -0.5, 0.0], &[0.25, 0.25, 0.5]],
    )?)?;
    network.add_layer(layer_from_rows("output", "identity", &[&[1.0, 2.0, 0.0]])?)?;

    let out = network.forward(&[1.0, 2.0])?;
    check_vec_near(&out, &[2.0], 1e-12);
    // Caches are observable after the pass.
    check_vec_near(network.layer(0)?.inputs(), &[1.0, 2.0], 0.0);
    check_vec_near(&network.layer(0)?.outputs(), &[-0.5, 1.25], 1e-12);
    check_vec_near(network.layer(1)?.inputs(), &[-0.5, 1.25], 1e-12);
    Ok(())
}

#[test]
fn test_forward_does_not_change_weights() -> Result<(), NeuraFeedError> {
    let mut network = two_two_one(3);
    let before: Vec<_> = network.layers().iter().map(Layer::weights_matrix).collect();
    network.forward(&[1.0, 0.0])?;
    network.forward(&[0.0, 1.0])?;
    let after: Vec<_> = network.layers().iter().map(Layer::weights_matrix).collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_forward_is_deterministic() -> Result<(), NeuraFeedError> {
    let mut a = two_two_one(11);
    let mut b = two_two_one(11);
    let x = [0.3, 0.9];
    let first = a.forward(&x)?;
    assert_eq!(first, a.forward(&x)?);
    assert_eq!(first, b.forward(&x)?);
    Ok(())
}

#[test]
fn test_forward_unknown_activation_fails() -> Result<(), NeuraFeedError> {
    let mut network = Network::new("bad");
    network.add_layer(layer_from_rows("only", "softplus", &[&[1.0, 0.0]])?)?;
    assert_eq!(
        network.forward(&[1.0]),
        Err(NeuraFeedError::UnknownActivationFunction("softplus".to_string()))
    );
    Ok(())
}

#[test]
fn test_forward_wrong_input_length_fails() {
    let mut network = two_two_one(5);
    assert!(matches!(
        network.forward(&[1.0, 2.0, 3.0]),
        Err(NeuraFeedError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_add_layer_checks_arity_chain() -> Result<(), NeuraFeedError> {
    let mut network = Network::new("chain");
    network.add_layer(layer_from_rows("hidden", "identity", &[&[1.0, 0.0], &[1.0, 0.0]])?)?;
    let err = network
        .add_layer(layer_from_rows("output", "identity", &[&[1.0, 1.0, 1.0, 0.0]])?)
        .unwrap_err();
    assert_eq!(err, NeuraFeedError::DimensionMismatch { expected: 2, actual: 3 });
    assert_eq!(network.layer_count(), 1);
    Ok(())
}

#[test]
fn test_from_layers_and_names() -> Result<(), NeuraFeedError> {
    let mut rng = StdRng::seed_from_u64(0);
    let network = Network::from_layers(
        "stack",
        vec![
            Layer::random("a", "tanh", 3, 4, &mut rng),
            Layer::random("b", "tanh", 4, 2, &mut rng),
            Layer::random("c", "logistic", 2, 1, &mut rng),
        ],
    )?;
    assert_eq!(network.layer_names(), vec!["a", "b", "c"]);
    assert_eq!(network.input_arity(), 3);
    assert_eq!(network.output_units(), 1);
    assert!(network.layer(3).is_err());
    Ok(())
}

#[test]
fn test_layer_mut_sets_weights() -> Result<(), NeuraFeedError> {
    let mut network = Network::new("manual");
    let mut layer = Layer::new("only", "identity");
    layer.add_neuron(Neuron::new(vec![0.0], 0.0))?;
    network.add_layer(layer)?;
    network.layer_mut(0)?.neuron_mut(0)?.set_weight(0, 3.0)?;
    assert_eq!(network.forward(&[2.0])?, vec![6.0]);
    Ok(())
}

#[test]
fn test_learning_rate_setter() {
    let mut network = Network::new("lr");
    network.set_learning_rate(0.7);
    assert_eq!(network.learning_rate(), 0.7);
    assert_eq!(network.config().learning_rate, 0.7);
}
