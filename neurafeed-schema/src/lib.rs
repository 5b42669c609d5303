//! Textual network schemas for `neurafeed-core`.
//!
//! A schema names the network on its first line and describes one layer per
//! following line:
//!
//! ```text
//! nome=xor
//! layer={ nome=hidden activationFunction=logistic inputUnits=2 outputUnits=2 weights=[[0.5,0.5,0.1],[-0.5,1,0]] }
//! layer={ nome=output activationFunction=logistic inputUnits=2 outputUnits=1 }
//! ```
//!
//! [`load`] and [`parse_str`] read schemas, [`NetworkSchema::build`] turns one
//! into a [`neurafeed_core::Network`] and [`format_network`] writes a network
//! back out.

pub mod descriptor;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod tokens;

pub use descriptor::{LayerDescriptor, NetworkSchema};
pub use error::SchemaError;
pub use formatter::{format_network, save};
pub use parser::{load, parse_str};
