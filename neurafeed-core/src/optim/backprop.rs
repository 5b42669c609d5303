use super::update_rule::{apply_delta, check_expected, check_input, UpdateRule};
use crate::error::NeuraFeedError;
use crate::nn::Layer;
use log::trace;

/// The generalized delta rule for networks of two or more layers.
///
/// Output layer, neuron `j` with cached output `y`, target `t` and previous
/// layer outputs `h`:
///
/// ```text
/// δj = (t - y) * f1(Σ wji·hi + θj)
/// ```
///
/// Hidden layer, neuron `j`, with `k` ranging over the next layer's neurons:
///
/// ```text
/// δj = (Σk δk · wkj) * f1(Σ wji·xi + θj)
/// ```
///
/// Every neuron then moves `w[i] += lr * δ * x[i]` and `θ += lr * δ`, and stores
/// `δ` as its error factor at every weight index so the layer before it can
/// read `δk` at its own neuron index.
///
/// Layers must be updated from the output layer backwards: a hidden layer
/// reads the error factors the next layer wrote during the same instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackpropRule;

impl BackpropRule {
    fn update_output_layer(
        layer: &mut Layer,
        previous_outputs: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        check_expected(layer, expected)?;
        let actual = layer.outputs();
        for nj in 0..layer.output_units() {
            check_input(layer.neuron(nj)?, previous_outputs)?;
            let f1 = layer.activate_derivative(nj, previous_outputs)?;
            let delta = (expected[nj] - actual[nj]) * f1;
            trace!("backprop: output '{}' neuron {} delta {}", layer.name(), nj, delta);
            Self::commit(layer, nj, delta, lr)?;
        }
        Ok(())
    }

    fn update_hidden_layer(
        layer: &mut Layer,
        next: &Layer,
        input: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        for nj in 0..layer.output_units() {
            check_input(layer.neuron(nj)?, input)?;
            let mut propagated = 0.0;
            for downstream in next.neurons() {
                propagated += downstream.error_factor(nj)? * downstream.weight(nj)?;
            }
            let f1 = layer.activate_derivative(nj, input)?;
            let delta = propagated * f1;
            trace!("backprop: hidden '{}' neuron {} delta {}", layer.name(), nj, delta);
            Self::commit(layer, nj, delta, lr)?;
        }
        Ok(())
    }

    /// Records `delta` as the error factor of neuron `nj` and applies it to the
    /// inputs the neuron just cached.
    fn commit(layer: &mut Layer, nj: usize, delta: f64, lr: f64) -> Result<(), NeuraFeedError> {
        let neuron = layer.neuron_mut(nj)?;
        for weight_index in 0..neuron.input_arity() {
            neuron.set_error_factor(weight_index, delta);
        }
        let inputs = neuron.last_inputs().to_vec();
        apply_delta(neuron, delta, &inputs, lr)
    }
}

impl UpdateRule for BackpropRule {
    fn update(
        &self,
        layers: &mut [Layer],
        index: usize,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        let len = layers.len();
        if index >= len {
            return Err(NeuraFeedError::IndexOutOfBounds { index, len });
        }

        // Everything up to `index` is writable, the next layer stays readable.
        let (head, tail) = layers.split_at_mut(index + 1);
        let (before, current) = head.split_at_mut(index);
        let layer = &mut current[0];

        let result = match tail.first() {
            None => {
                let previous_outputs = match before.last() {
                    Some(previous) => previous.outputs(),
                    None => input.to_vec(),
                };
                Self::update_output_layer(layer, &previous_outputs, expected, lr)
            }
            Some(next) => Self::update_hidden_layer(layer, next, input, lr),
        };
        result.map_err(|e| NeuraFeedError::training(layer.name(), e))
    }
}

#[cfg(test)]
#[path = "backprop_test.rs"]
mod tests;
