use crate::config::TrainingConfig;
use crate::error::NeuraFeedError;
use crate::nn::Layer;
use crate::optim::UpdateRuleKind;

/// An ordered stack of layers evaluated first to last.
///
/// The network owns its layers and their neurons exclusively; forward passes
/// and training mutate them in place. Insertion order is evaluation order and
/// the topology does not change once training starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    name: String,
    layers: Vec<Layer>,
    pub(crate) config: TrainingConfig,
    pub(crate) update_rule: Option<UpdateRuleKind>,
}

impl Network {
    pub fn new(name: &str) -> Self {
        Self::with_config(name, TrainingConfig::default())
    }

    pub fn with_config(name: &str, config: TrainingConfig) -> Self {
        Network {
            name: name.to_string(),
            layers: Vec::new(),
            config,
            update_rule: None,
        }
    }

    /// Builds a network from already constructed layers, checking that each
    /// layer accepts the previous one's output.
    pub fn from_layers(name: &str, layers: Vec<Layer>) -> Result<Self, NeuraFeedError> {
        let mut network = Network::new(name);
        for layer in layers {
            network.add_layer(layer)?;
        }
        Ok(network)
    }

    /// Appends a layer at the output end.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` when both this layer and the
    /// current last layer have neurons and this layer's input arity differs
    /// from the last layer's output unit count.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), NeuraFeedError> {
        if let Some(last) = self.layers.last() {
            let fed = last.output_units();
            if fed > 0 && layer.output_units() > 0 && layer.input_arity() != fed {
                return Err(NeuraFeedError::DimensionMismatch {
                    expected: fed,
                    actual: layer.input_arity(),
                });
            }
        }
        self.layers.push(layer);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn layer(&self, index: usize) -> Result<&Layer, NeuraFeedError> {
        self.layers.get(index).ok_or(NeuraFeedError::IndexOutOfBounds {
            index,
            len: self.layers.len(),
        })
    }

    /// Live access to one layer, e.g. to set weights by hand.
    pub fn layer_mut(&mut self, index: usize) -> Result<&mut Layer, NeuraFeedError> {
        let len = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(NeuraFeedError::IndexOutOfBounds { index, len })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(Layer::name).collect()
    }

    /// Arity of the first layer, i.e. the expected input length.
    pub fn input_arity(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_arity)
    }

    pub fn output_units(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_units)
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrainingConfig) {
        self.config = config;
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn set_learning_rate(&mut self, lr: f64) {
        self.config.learning_rate = lr;
    }

    /// Update rule chosen by the most recent weight update, if any.
    pub fn update_rule(&self) -> Option<UpdateRuleKind> {
        self.update_rule
    }

    /// Runs `inputs` through every layer in order and returns the last
    /// layer's outputs. Each layer caches the vector it was fed and its
    /// outputs; weights are never modified.
    ///
    /// # Errors
    /// `EmptyNetwork` without layers, otherwise the first failure raised by a
    /// layer (unknown activation, dimension mismatch). Layers after the
    /// failing one keep their previous caches.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NeuraFeedError> {
        if self.layers.is_empty() {
            return Err(NeuraFeedError::EmptyNetwork);
        }
        let mut current = inputs.to_vec();
        for layer in self.layers.iter_mut() {
            layer.set_inputs(&current);
            layer.process()?;
            current = layer.outputs();
        }
        Ok(current)
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
