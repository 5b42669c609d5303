use crate::error::NeuraFeedError;
use std::time::Duration;

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Error below which an instance counts as fitted and an epoch as converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.01;

/// Hyperparameters and run bounds for [`Network::train`](crate::Network::train).
///
/// Without `max_epochs` or `time_limit` training loops until convergence, which
/// never happens for topologies or learning rates that diverge.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub convergence_threshold: f64,
    pub max_epochs: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            max_epochs: None,
            time_limit: None,
        }
    }
}

impl TrainingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = Some(max_epochs);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::InvalidConfiguration` for a non-finite or
    /// non-positive learning rate or a negative / non-finite threshold.
    pub fn validate(&self) -> Result<(), NeuraFeedError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NeuraFeedError::InvalidConfiguration(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(NeuraFeedError::InvalidConfiguration(format!(
                "convergence threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.learning_rate, 0.2);
        assert_eq!(config.convergence_threshold, 0.01);
        assert_eq!(config.max_epochs, None);
        assert_eq!(config.time_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = TrainingConfig::new()
            .with_learning_rate(0.5)
            .with_convergence_threshold(0.05)
            .with_max_epochs(100)
            .with_time_limit(Duration::from_secs(3));
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.convergence_threshold, 0.05);
        assert_eq!(config.max_epochs, Some(100));
        assert_eq!(config.time_limit, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = TrainingConfig::new().with_learning_rate(lr);
            assert!(
                matches!(config.validate(), Err(NeuraFeedError::InvalidConfiguration(_))),
                "lr {} should be rejected",
                lr
            );
        }
        let config = TrainingConfig::new().with_convergence_threshold(-1.0);
        assert!(config.validate().is_err());
    }
}
