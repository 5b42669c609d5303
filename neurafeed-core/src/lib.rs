//! A minimal feed-forward neural network engine.
//!
//! Networks are stacks of [`Layer`]s of [`Neuron`]s. Activation functions are
//! looked up by name in the [`activation`] catalog and training picks one of
//! three update rules from the network's shape (see [`UpdateRuleKind`]).

pub mod activation;
pub mod config;
pub mod error;
pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;

pub use config::TrainingConfig;
pub use error::NeuraFeedError;
pub use model::{Network, TrainingReport};
pub use nn::{Layer, Neuron};
pub use optim::UpdateRuleKind;
