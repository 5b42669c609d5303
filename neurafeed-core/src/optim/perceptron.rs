use super::update_rule::{apply_delta, check_expected, check_input, layer_at, UpdateRule};
use crate::error::NeuraFeedError;
use crate::nn::Layer;
use log::trace;

/// The perceptron learning rule for a single `step` layer.
///
/// For neuron `n` with cached output `y` and target `t`:
/// `w[i] += lr * (t - y) * x[i]` and `threshold += lr * (t - y)`.
/// No derivative is involved, which is what makes it usable with `step`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerceptronRule;

impl PerceptronRule {
    fn update_layer(
        layer: &mut Layer,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        check_expected(layer, expected)?;
        let actual = layer.outputs();
        for (ni, neuron) in layer.neurons_mut().iter_mut().enumerate() {
            check_input(neuron, input)?;
            let error = expected[ni] - actual[ni];
            trace!("perceptron: neuron {} error {}", ni, error);
            apply_delta(neuron, error, input, lr)?;
        }
        Ok(())
    }
}

impl UpdateRule for PerceptronRule {
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
