use thiserror::Error;

/// Custom error type for the NeuraFeed engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuraFeedError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown activation function: {0}")]
    UnknownActivationFunction(String),

    #[error("Activation function '{function}' has no derivative")]
    MissingDerivative { function: String },

    #[error("Invalid neuron: not a member of layer '{layer}'")]
    InvalidNeuron { layer: String },

    #[error("Training failure in layer '{layer}': {reason}")]
    TrainingFailure { layer: String, reason: String },

    #[error("Error factor for weight index {index} read before it was written")]
    MissingErrorFactor { index: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Network has no layers")]
    EmptyNetwork,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl NeuraFeedError {
    /// Wraps a failure raised inside an update rule so the caller knows which
    /// layer was being trained. Already wrapped failures pass through.
    pub fn training(layer: &str, err: NeuraFeedError) -> Self {
        match err {
            wrapped @ NeuraFeedError::TrainingFailure { .. } => wrapped,
            other => NeuraFeedError::TrainingFailure {
                layer: layer.to_string(),
                reason: other.to_string(),
            },
        }
    }
}
