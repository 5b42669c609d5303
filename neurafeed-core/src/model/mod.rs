//! The network container and its training loop.
//!
//! [`Network`] chains layers for the forward pass; the training entry points
//! live in `training.rs` and report through [`TrainingReport`].

pub mod network;
pub mod training;

pub use network::Network;
pub use training::TrainingReport;
