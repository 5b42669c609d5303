use super::update_rule::{apply_delta, check_expected, check_input, layer_at, UpdateRule};
use crate::error::NeuraFeedError;
use crate::nn::Layer;
use log::trace;

/// The delta rule for a single layer with a differentiable activation.
///
/// For neuron `n` with cached output `y`, target `t` and `f1` the activation
/// derivative at the neuron's weighted sum on `x`:
/// `w[i] += lr * (t - y) * f1 * x[i]` and `threshold += lr * (t - y) * f1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeltaRule;

impl DeltaRule {
    fn update_layer(
        layer: &mut Layer,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        check_expected(layer, expected)?;
        let actual = layer.outputs();
        for ni in 0..layer.output_units() {
            check_input(layer.neuron(ni)?, input)?;
            let f1 = layer.activate_derivative(ni, input)?;
            let delta = (expected[ni] - actual[ni]) * f1;
            trace!("delta: neuron {} delta {}", ni, delta);
            apply_delta(layer.neuron_mut(ni)?, delta, input, lr)?;
        }
        Ok(())
    }
}

impl UpdateRule for DeltaRule {
    fn update(
        &self,
        layers: &mut [Layer],
        index: usize,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        let layer = layer_at(layers, index)?;
        Self::update_layer(layer, input, expected, lr)
            .map_err(|e| NeuraFeedError::training(layer.name(), e))
    }
}

#[cfg(test)]
#[path = "delta_test.rs"]
mod tests;
