// src/nn/mod.rs
// Building blocks of a network: neurons, the layers that own them and the
// random initialisation helpers they share.

pub mod init;
pub mod layer;
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use neuron::Neuron;
