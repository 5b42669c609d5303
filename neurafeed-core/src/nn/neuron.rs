use crate::error::NeuraFeedError;
use crate::nn::init;
use rand::Rng;
use std::collections::HashMap;

/// The basic element of a network.
///
/// A neuron has a fixed number of input channels, one weight per channel and a
/// threshold (bias). Evaluating it produces the weighted sum of its inputs
/// plus the threshold; the owning [`Layer`](crate::nn::Layer) applies the
/// activation function on top.
///
/// During multi-layer training every neuron also carries an error factor per
/// weight index, written by the update rule of its own layer and read back by
/// the rule of the previous layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    arity: usize,
    weights: Vec<f64>,
    threshold: f64,
    last_inputs: Vec<f64>,
    error_factors: HashMap<usize, f64>,
}

impl Neuron {
    /// Creates a neuron from explicit weights and threshold. The arity is the
    /// number of weights.
    pub fn new(weights: Vec<f64>, threshold: f64) -> Self {
        Neuron {
            arity: weights.len(),
            weights,
            threshold,
            last_inputs: Vec::new(),
            error_factors: HashMap::new(),
        }
    }

    /// Creates a neuron with `arity` inputs whose weights are drawn on first
    /// evaluation and whose threshold is drawn now, all from `[0, 1)`.
    pub fn unweighted<R: Rng + ?Sized>(arity: usize, rng: &mut R) -> Self {
        Neuron {
            arity,
            weights: Vec::new(),
            threshold: rng.gen::<f64>(),
            last_inputs: Vec::new(),
            error_factors: HashMap::new(),
        }
    }

    /// Creates a neuron with `arity` inputs and random weights and threshold.
    pub fn random<R: Rng + ?Sized>(arity: usize, rng: &mut R) -> Self {
        let weights = init::uniform(rng, arity);
        Neuron::new(weights, rng.gen::<f64>())
    }

    /// Creates a neuron from a weight row as found in a network schema.
    ///
    /// A row of `arity` entries holds only weights and the threshold is drawn
    /// from `[0, 1)`. A row of `arity + 1` entries carries the threshold last.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` for any other row length.
    pub fn from_row<R: Rng + ?Sized>(
        arity: usize,
        row: &[f64],
        rng: &mut R,
    ) -> Result<Self, NeuraFeedError> {
        if row.len() == arity {
            Ok(Neuron::new(row.to_vec(), rng.gen::<f64>()))
        } else if row.len() == arity + 1 {
            Ok(Neuron::new(row[..arity].to_vec(), row[arity]))
        } else {
            Err(NeuraFeedError::DimensionMismatch {
                expected: arity + 1,
                actual: row.len(),
            })
        }
    }

    /// Computes `Σ(weights[i] * inputs[i]) + threshold` and caches `inputs`.
    ///
    /// Unset weights are initialised from `[0, 1)` using the thread-local RNG.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` if `inputs` does not match
    /// the neuron's arity.
    pub fn evaluate(&mut self, inputs: &[f64]) -> Result<f64, NeuraFeedError> {
        self.evaluate_with_rng(inputs, &mut rand::thread_rng())
    }

    /// Same as [`evaluate`](Self::evaluate) with the RNG used for lazy weight
    /// initialisation supplied by the caller.
    pub fn evaluate_with_rng<R: Rng + ?Sized>(
        &mut self,
        inputs: &[f64],
        rng: &mut R,
    ) -> Result<f64, NeuraFeedError> {
        if inputs.len() != self.arity {
            return Err(NeuraFeedError::DimensionMismatch {
                expected: self.arity,
                actual: inputs.len(),
            });
        }
        if self.weights.len() != self.arity {
            self.weights.resize(self.arity, 0.0);
            init::uniform_(rng, &mut self.weights);
        }

        self.last_inputs.clear();
        self.last_inputs.extend_from_slice(inputs);

        let weighted: f64 = self
            .weights
            .iter()
            .zip(inputs.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(weighted + self.threshold)
    }

    /// Number of input channels.
    pub fn input_arity(&self) -> usize {
        self.arity
    }

    /// Returns `true` once weights exist, either supplied or lazily drawn.
    pub fn is_initialized(&self) -> bool {
        self.weights.len() == self.arity
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weight(&self, index: usize) -> Result<f64, NeuraFeedError> {
        self.weights
            .get(index)
            .copied()
            .ok_or(NeuraFeedError::IndexOutOfBounds {
                index,
                len: self.weights.len(),
            })
    }

    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<(), NeuraFeedError> {
        let len = self.weights.len();
        let slot = self
            .weights
            .get_mut(index)
            .ok_or(NeuraFeedError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Replaces every weight at once.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::DimensionMismatch` if the length differs from
    /// the arity.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<(), NeuraFeedError> {
        if weights.len() != self.arity {
            return Err(NeuraFeedError::DimensionMismatch {
                expected: self.arity,
                actual: weights.len(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Weights followed by the threshold, the row layout of a network schema.
    pub fn weights_and_threshold(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.weights.len() + 1);
        row.extend_from_slice(&self.weights);
        row.push(self.threshold);
        row
    }

    /// Inputs cached by the most recent evaluation.
    pub fn last_inputs(&self) -> &[f64] {
        &self.last_inputs
    }

    pub fn input(&self, index: usize) -> Result<f64, NeuraFeedError> {
        self.last_inputs
            .get(index)
            .copied()
            .ok_or(NeuraFeedError::IndexOutOfBounds {
                index,
                len: self.last_inputs.len(),
            })
    }

    /// Error factor stored for `index` by the last multi-layer update.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::MissingErrorFactor` if nothing was stored yet.
    pub fn error_factor(&self, index: usize) -> Result<f64, NeuraFeedError> {
        self.error_factors
            .get(&index)
            .copied()
            .ok_or(NeuraFeedError::MissingErrorFactor { index })
    }

    pub fn set_error_factor(&mut self, index: usize, value: f64) {
        self.error_factors.insert(index, value);
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
