// neurafeed-core/src/optim/mod.rs

//! Weight update rules for training networks.
//!
//! This module provides the `UpdateRule` trait and its three implementations,
//! one per network topology:
//!
//! - [`PerceptronRule`]: a single layer with the `step` activation.
//! - [`DeltaRule`]: a single layer with any differentiable activation.
//! - [`BackpropRule`]: two or more layers (generalized delta rule).
//!
//! [`UpdateRuleKind`] picks the right one for a stack of layers.

pub mod backprop;
pub mod delta;
pub mod perceptron;
pub mod update_rule;

// Re-export key items for easier access
pub use backprop::BackpropRule;
pub use delta::DeltaRule;
pub use perceptron::PerceptronRule;
pub use update_rule::{UpdateRule, UpdateRuleKind};
