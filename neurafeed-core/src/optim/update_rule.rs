use super::{BackpropRule, DeltaRule, PerceptronRule};
use crate::error::NeuraFeedError;
use crate::nn::{Layer, Neuron};
use std::fmt;

/// Trait defining the common interface for all weight update rules.
///
/// An update rule adjusts, in place, the weights and thresholds of every
/// neuron of one layer. The network calls it once per layer, walking from the
/// output layer back to the first one, after a forward pass on the same
/// instance so that every layer's cached outputs are current.
pub trait UpdateRule: fmt::Debug {
    /// Updates the neurons of `layers[index]`.
    ///
    /// # Arguments
    ///
    /// * `layers`: the whole network, so rules can read adjacent layers.
    /// * `index`: the layer being updated.
    /// * `input`: the vector that was fed to `layers[index]`.
    /// * `expected`: the expected network output for this instance.
    /// * `lr`: the learning rate.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or a `NeuraFeedError::TrainingFailure` naming the
    /// layer whose update failed.
    fn update(
        &self,
        layers: &mut [Layer],
        index: usize,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError>;
}

/// The update rule matching a network topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateRuleKind {
    Perceptron,
    SingleLayerDelta,
    MultiLayerBackprop,
}

impl UpdateRuleKind {
    /// One `step` layer trains with the perceptron rule, one layer of any other
    /// activation with the delta rule, anything deeper with back-propagation.
    pub fn for_layers(layers: &[Layer]) -> Self {
        match layers {
            [only] if only.activation_name().trim().eq_ignore_ascii_case("step") => {
                UpdateRuleKind::Perceptron
            }
            [_] => UpdateRuleKind::SingleLayerDelta,
            _ => UpdateRuleKind::MultiLayerBackprop,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpdateRuleKind::Perceptron => "perceptron",
            UpdateRuleKind::SingleLayerDelta => "single-layer delta",
            UpdateRuleKind::MultiLayerBackprop => "multi-layer backprop",
        }
    }
}

impl fmt::Display for UpdateRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl UpdateRule for UpdateRuleKind {
    fn update(
        &self,
        layers: &mut [Layer],
        index: usize,
        input: &[f64],
        expected: &[f64],
        lr: f64,
    ) -> Result<(), NeuraFeedError> {
        match self {
            UpdateRuleKind::Perceptron => PerceptronRule.update(layers, index, input, expected, lr),
            UpdateRuleKind::SingleLayerDelta => DeltaRule.update(layers, index, input, expected, lr),
            UpdateRuleKind::MultiLayerBackprop => {
                BackpropRule.update(layers, index, input, expected, lr)
            }
        }
    }
}

// --- Helpers shared by the rules ---

/// Resolves `layers[index]` or reports the bad index.
pub(crate) fn layer_at(layers: &mut [Layer], index: usize) -> Result<&mut Layer, NeuraFeedError> {
    let len = layers.len();
    layers
        .get_mut(index)
        .ok_or(NeuraFeedError::IndexOutOfBounds { index, len })
}

/// The expected vector must provide one target per neuron of the layer.
pub(crate) fn check_expected(layer: &Layer, expected: &[f64]) -> Result<(), NeuraFeedError> {
    if expected.len() != layer.output_units() {
        return Err(NeuraFeedError::DimensionMismatch {
            expected: layer.output_units(),
            actual: expected.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_input(neuron: &Neuron, input: &[f64]) -> Result<(), NeuraFeedError> {
    if neuron.input_arity() != input.len() {
        return Err(NeuraFeedError::DimensionMismatch {
            expected: neuron.input_arity(),
            actual: input.len(),
        });
    }
    Ok(())
}

/// `w[i] += lr * delta * inputs[i]` for every weight, then
/// `threshold += lr * delta`.
pub(crate) fn apply_delta(
    neuron: &mut Neuron,
    delta: f64,
    inputs: &[f64],
    lr: f64,
) -> Result<(), NeuraFeedError> {
    for (weight_index, x) in inputs.iter().enumerate() {
        let w = neuron.weight(weight_index)?;
        neuron.set_weight(weight_index, w + lr * delta * x)?;
    }
    neuron.set_threshold(neuron.threshold() + lr * delta);
    Ok(())
}

#[cfg(test)]
#[path = "update_rule_test.rs"]
mod tests;
