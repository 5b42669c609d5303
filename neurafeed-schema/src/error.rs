use neurafeed_core::NeuraFeedError;
use thiserror::Error;

/// Errors raised while reading or building a network schema.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SchemaError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid schema: the first line must start with 'nome=' and name the network")]
    MissingNetworkName,

    #[error("Invalid schema at line {line}: incomplete layer, expected token '{token}'")]
    MissingToken { line: usize, token: &'static str },

    #[error("Invalid schema at line {line}: '{value}' is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("Layer '{layer}' has {actual} weights, expected {expected} (or one threshold less per neuron)")]
    WeightCount {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Network(#[from] NeuraFeedError),
}

// io::Error is neither Clone nor PartialEq, keep its message only.
impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err.to_string())
    }
}
