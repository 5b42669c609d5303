use super::network::Network;
use crate::error::NeuraFeedError;
use crate::optim::{UpdateRule, UpdateRuleKind};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Outcome of a [`Network::train`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingReport {
    /// Full passes over the training set that were run.
    pub epochs: usize,
    /// Summed instance error of the last epoch (`f64::INFINITY` if none ran).
    pub final_error: f64,
    /// `false` when the epoch or time bound stopped the run first.
    pub converged: bool,
    pub elapsed: Duration,
}

impl Network {
    /// Trains the network on a single instance.
    ///
    /// Runs a forward pass and sums `|expected[i] - actual[i]|`. Below the
    /// convergence threshold the instance counts as fitted: nothing changes
    /// and 0 is returned. Otherwise the update rule for this topology is
    /// applied to every layer, from the last to the first, and the error
    /// measured before the update is returned.
    ///
    /// # Errors
    /// Any forward failure, `DimensionMismatch` if `expected` does not match
    /// the output size, or the `TrainingFailure` of the first layer whose
    /// update failed. Layers after it in the walk are left untouched.
    pub fn train_instance(
        &mut self,
        inputs: &[f64],
        expected: &[f64],
    ) -> Result<f64, NeuraFeedError> {
        let actual = self.forward(inputs)?;
        if expected.len() != actual.len() {
            return Err(NeuraFeedError::DimensionMismatch {
                expected: actual.len(),
                actual: expected.len(),
            });
        }

        let error: f64 = expected
            .iter()
            .zip(actual.iter())
            .map(|(e, a)| (e - a).abs())
            .sum();
        if error < self.config.convergence_threshold {
            return Ok(0.0);
        }

        let rule = UpdateRuleKind::for_layers(self.layers());
        if self.update_rule != Some(rule) {
            debug!("Network '{}': training with the {} rule", self.name(), rule);
            self.update_rule = Some(rule);
        }
        let lr = self.config.learning_rate;
        let layers = self.layers_mut();
        for index in (0..layers.len()).rev() {
            let layer_input = match index {
                0 => inputs.to_vec(),
                _ => layers[index - 1].outputs(),
            };
            rule.update(layers, index, &layer_input, expected, lr)?;
        }
        Ok(error)
    }

    /// Trains on every `(inputs[i], outputs[i])` pair, epoch after epoch,
    /// until the summed error of one full pass falls below the convergence
    /// threshold or a configured epoch/time bound is reached.
    ///
    /// # Errors
    /// `InvalidConfiguration` for a bad configuration or mismatched instance
    /// counts, `EmptyNetwork` without layers, and the first failure raised by
    /// [`train_instance`](Self::train_instance), which aborts the run.
    pub fn train<I, O>(&mut self, inputs: &[I], outputs: &[O]) -> Result<TrainingReport, NeuraFeedError>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        self.config.validate()?;
        if inputs.len() != outputs.len() {
            return Err(NeuraFeedError::InvalidConfiguration(format!(
                "training set has {} inputs but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        if self.layers().is_empty() {
            return Err(NeuraFeedError::EmptyNetwork);
        }

        let start = Instant::now();
        if inputs.is_empty() {
            return Ok(TrainingReport {
                epochs: 0,
                final_error: 0.0,
                converged: true,
                elapsed: start.elapsed(),
            });
        }

        info!(
            "Network '{}': training started on {} instances (lr = {})",
            self.name(),
            inputs.len(),
            self.config.learning_rate
        );

        let threshold = self.config.convergence_threshold;
        let max_epochs = self.config.max_epochs;
        let time_limit = self.config.time_limit;
        let mut epochs = 0;
        let mut final_error = f64::INFINITY;
        let mut converged = false;

        loop {
            if max_epochs.map_or(false, |max| epochs >= max) {
                warn!(
                    "Network '{}': stopped after {} epochs without converging (error {})",
                    self.name(),
                    epochs,
                    final_error
                );
                break;
            }
            if time_limit.map_or(false, |limit| start.elapsed() >= limit) {
                warn!(
                    "Network '{}': time limit reached after {} epochs (error {})",
                    self.name(),
                    epochs,
                    final_error
                );
                break;
            }

            let mut epoch_error = 0.0;
            for (i, (x, y)) in inputs.iter().zip(outputs.iter()).enumerate() {
                epoch_error += self
                    .train_instance(x.as_ref(), y.as_ref())
                    .map_err(|e| {
                        warn!("Network '{}': instance {} failed: {}", self.name(), i, e);
                        e
                    })?;
            }
            epochs += 1;
            final_error = epoch_error;
            debug!("Network '{}': epoch {} error {}", self.name(), epochs, epoch_error);

            if epoch_error < threshold {
                converged = true;
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            "Network '{}': training finished after {} epochs in {:?} (error {}, converged: {})",
            self.name(),
            epochs,
            elapsed,
            final_error,
            converged
        );
        Ok(TrainingReport {
            epochs,
            final_error,
            converged,
            elapsed,
        })
    }
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
