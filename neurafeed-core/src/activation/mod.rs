// src/activation/mod.rs

//! # Activation Functions
//!
//! This module holds the activation catalog: a static table mapping a function
//! name to a pair of pure numeric functions (forward and first derivative).
//! Layers refer to their activation by name and resolve it through
//! [`lookup`] on every evaluation; the table itself is immutable and shared.
//!
//! ## Currently Implemented:
//! - `step`: 0/1 threshold at 0. No derivative, so only the perceptron rule
//!   can train it.
//! - `identity`
//! - `logistic` (alias `sigmoid`)
//! - `tanh`
//! - `relu`

pub mod catalog;
pub mod functions;

// Re-export key items
pub use catalog::{lookup, ActivationFunction, CATALOG};
