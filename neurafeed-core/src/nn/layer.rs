use crate::activation::{self, ActivationFunction};
use crate::error::NeuraFeedError;
use crate::nn::neuron::Neuron;
use log::trace;
use rand::Rng;

/// An ordered group of neurons sharing one activation function and one input
/// arity.
///
/// The layer caches the input vector it was last fed and one output per
/// neuron, index-aligned with `neurons`. The network reads those caches to
/// chain layers together and the update rules read them during training.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    activation_name: String,
    neurons: Vec<Neuron>,
    cached_inputs: Vec<f64>,
    cached_outputs: Vec<f64>,
}

impl Layer {
    /// Creates an empty layer. The activation name is resolved on every
    /// activation, so an unknown name only fails once the layer is used.
    pub fn new(name: &str, activation_name: &str) -> Self {
        Layer {
            name: name.to_string(),
            activation_name: activation_name.to_string(),
            neurons: Vec::new(),
            cached_inputs: Vec::new(),
            cached_outputs: Vec::new(),
        }
    }

    /// Creates a layer of `output_units` neurons with `input_arity` inputs each,
    /// weights and thresholds drawn from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(
        name: &str,
        activation_name: &str,
        input_arity: usize,
        output_units: usize,
        rng: &mut R,
    ) -> Self {
        let mut layer = Layer::new(name, activation_name);
        for _ in 0..output_units {
            layer.neurons.push(Neuron::random(input_arity, rng));
            layer.cached_outputs.push(0.0);
        }
        layer
    }

    /// Creates a layer from explicit weight rows. Every row is either
    /// `input_arity` weights (threshold drawn at random) or `input_arity + 1`
    /// values with the threshold last.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` for a row of any other length.
    pub fn from_rows<R: Rng + ?Sized>(
        name: &str,
        activation_name: &str,
        input_arity: usize,
        rows: &[Vec<f64>],
        rng: &mut R,
    ) -> Result<Self, NeuraFeedError> {
        let mut layer = Layer::new(name, activation_name);
        for row in rows {
            layer.add_neuron(Neuron::from_row(input_arity, row, rng)?)?;
        }
        Ok(layer)
    }

    /// Appends a neuron and reserves its output slot.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` if its arity differs from
    /// the neurons already in the layer.
    pub fn add_neuron(&mut self, neuron: Neuron) -> Result<(), NeuraFeedError> {
        if let Some(first) = self.neurons.first() {
            if first.input_arity() != neuron.input_arity() {
                return Err(NeuraFeedError::DimensionMismatch {
                    expected: first.input_arity(),
                    actual: neuron.input_arity(),
                });
            }
        }
        self.neurons.push(neuron);
        self.cached_outputs.push(0.0);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activation_name(&self) -> &str {
        &self.activation_name
    }

    /// Resolves this layer's activation through the catalog.
    pub fn activation(&self) -> Result<&'static ActivationFunction, NeuraFeedError> {
        activation::lookup(&self.activation_name)
    }

    /// Shared input arity of the neurons, 0 for an empty layer.
    pub fn input_arity(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_arity)
    }

    pub fn output_units(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Live handles to the neurons, for update rules mutating weights in place.
    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    pub fn neuron(&self, index: usize) -> Result<&Neuron, NeuraFeedError> {
        self.neurons.get(index).ok_or(NeuraFeedError::IndexOutOfBounds {
            index,
            len: self.neurons.len(),
        })
    }

    pub fn neuron_mut(&mut self, index: usize) -> Result<&mut Neuron, NeuraFeedError> {
        let len = self.neurons.len();
        self.neurons
            .get_mut(index)
            .ok_or(NeuraFeedError::IndexOutOfBounds { index, len })
    }

    /// Evaluates neuron `index` on `inputs` and applies the activation.
    ///
    /// # Errors
    /// `UnknownActivationFunction` if the name has no catalog entry,
    /// `IndexOutOfBounds` for a bad index and `DimensionMismatch` for an input
    /// of the wrong length.
    pub fn activate(&mut self, index: usize, inputs: &[f64]) -> Result<f64, NeuraFeedError> {
        let function = self.activation()?;
        let net = self.neuron_mut(index)?.evaluate(inputs)?;
        Ok(function.apply(net))
    }

    /// Evaluates neuron `index` on `inputs` and applies the derivative of the
    /// activation. Used by the gradient update rules only.
    ///
    /// # Errors
    /// As [`activate`](Self::activate), plus `MissingDerivative` for
    /// activations without a derivative.
    pub fn activate_derivative(
        &mut self,
        index: usize,
        inputs: &[f64],
    ) -> Result<f64, NeuraFeedError> {
        let function = self.activation()?;
        let net = self.neuron_mut(index)?.evaluate(inputs)?;
        function.apply_derivative(net)
    }

    /// Activates every neuron on the cached inputs and stores the outputs.
    ///
    /// Outputs are written only once every neuron succeeded, so a failure
    /// never leaves a half-updated output cache behind.
    pub fn process(&mut self) -> Result<(), NeuraFeedError> {
        let function = self.activation()?;
        let inputs = std::mem::take(&mut self.cached_inputs);
        let outputs: Result<Vec<f64>, NeuraFeedError> = self
            .neurons
            .iter_mut()
            .map(|neuron| neuron.evaluate(&inputs).map(|net| function.apply(net)))
            .collect();
        self.cached_inputs = inputs;
        let outputs = outputs?;
        trace!("Layer '{}': outputs {:?}", self.name, outputs);
        self.cached_outputs = outputs;
        Ok(())
    }

    pub fn set_output(&mut self, index: usize, value: f64) -> Result<(), NeuraFeedError> {
        let len = self.cached_outputs.len();
        let slot = self
            .cached_outputs
            .get_mut(index)
            .ok_or(NeuraFeedError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Stores the output of the neuron living at address `neuron`.
    ///
    /// The address is the one of a neuron borrowed from
    /// [`neuron`](Self::neuron) or [`neurons`](Self::neurons), converted to a
    /// pointer so the shared borrow ends before this call takes `&mut self`.
    /// It is only compared against the addresses of the owned neurons and
    /// never dereferenced, so a stale or foreign pointer is merely rejected.
    /// Any mutation of the neuron list in between (`add_neuron`) may move the
    /// neurons and invalidate the address.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::InvalidNeuron` if no neuron of this layer lives
    /// at that address (an equal copy is not enough).
    pub fn set_output_for(&mut self, neuron: *const Neuron, value: f64) -> Result<(), NeuraFeedError> {
        let index = self
            .index_of_address(neuron)
            .ok_or_else(|| NeuraFeedError::InvalidNeuron {
                layer: self.name.clone(),
            })?;
        self.set_output(index, value)
    }

    /// Index of `neuron` in this layer, by identity: a clone of a member is
    /// not found.
    pub fn position_of(&self, neuron: &Neuron) -> Option<usize> {
        self.index_of_address(neuron)
    }

    fn index_of_address(&self, address: *const Neuron) -> Option<usize> {
        self.neurons.iter().position(|n| std::ptr::eq(n, address))
    }

    /// Snapshot of the cached outputs.
    pub fn outputs(&self) -> Vec<f64> {
        self.cached_outputs.clone()
    }

    pub fn inputs(&self) -> &[f64] {
        &self.cached_inputs
    }

    pub fn set_inputs(&mut self, inputs: &[f64]) {
        self.cached_inputs.clear();
        self.cached_inputs.extend_from_slice(inputs);
    }

    /// One row per neuron: its weights followed by its threshold.
    pub fn weights_matrix(&self) -> Vec<Vec<f64>> {
        self.neurons
            .iter()
            .map(Neuron::weights_and_threshold)
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
