use crate::error::SchemaError;
use log::debug;
use neurafeed_core::nn::{Layer, Neuron};
use neurafeed_core::Network;
use rand::Rng;

/// One layer line of a schema.
///
/// `weights` holds one row per neuron. A row is either `input_units` weights
/// (the threshold is drawn at random on build) or `input_units + 1` values
/// with the threshold last. `None` randomises every weight and threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDescriptor {
    pub name: String,
    pub activation: String,
    pub input_units: usize,
    pub output_units: usize,
    pub weights: Option<Vec<Vec<f64>>>,
}

impl LayerDescriptor {
    /// Splits a flat weight list into rows according to the layer shape.
    ///
    /// # Errors
    /// `SchemaError::WeightCount` unless `values` holds exactly
    /// `output_units * input_units` or `output_units * (input_units + 1)`
    /// numbers.
    pub fn split_rows(
        layer: &str,
        input_units: usize,
        output_units: usize,
        values: &[f64],
    ) -> Result<Vec<Vec<f64>>, SchemaError> {
        // Unit counts come straight from the schema text and may overflow.
        let without_thresholds = output_units.checked_mul(input_units);
        let with_thresholds = input_units
            .checked_add(1)
            .and_then(|row| output_units.checked_mul(row));
        let row_len = if without_thresholds == Some(values.len()) {
            input_units
        } else if with_thresholds == Some(values.len()) {
            input_units + 1
        } else {
            return Err(SchemaError::WeightCount {
                layer: layer.to_string(),
                expected: with_thresholds.unwrap_or(usize::MAX),
                actual: values.len(),
            });
        };
        if row_len == 0 {
            return Ok(vec![Vec::new(); output_units]);
        }
        Ok(values.chunks(row_len).map(<[f64]>::to_vec).collect())
    }

    /// Captures a layer with its current weights, thresholds last. A layer
    /// holding neurons whose weights are still undrawn is captured without
    /// weights.
    pub fn from_layer(layer: &Layer) -> Self {
        let initialized = layer.neurons().iter().all(Neuron::is_initialized);
        LayerDescriptor {
            name: layer.name().to_string(),
            activation: layer.activation_name().to_string(),
            input_units: layer.input_arity(),
            output_units: layer.output_units(),
            weights: initialized.then(|| layer.weights_matrix()),
        }
    }

    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Layer, SchemaError> {
        let layer = match &self.weights {
            None => Layer::random(
                &self.name,
                &self.activation,
                self.input_units,
                self.output_units,
                rng,
            ),
            Some(rows) => {
                Layer::from_rows(&self.name, &self.activation, self.input_units, rows, rng)?
            }
        };
        Ok(layer)
    }
}

/// A parsed network description: a name and its layers in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSchema {
    pub name: String,
    pub layers: Vec<LayerDescriptor>,
}

impl NetworkSchema {
    /// Builds the network, drawing missing weights from `rand::thread_rng()`.
    pub fn build(&self) -> Result<Network, SchemaError> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Builds the network, drawing missing weights from `rng`.
    ///
    /// # Errors
    /// `SchemaError::Network` wrapping a `DimensionMismatch` when a weight row
    /// or a layer's arity does not fit.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network, SchemaError> {
        let mut network = Network::new(&self.name);
        for descriptor in &self.layers {
            debug!(
                "Network '{}': building layer '{}' ({} -> {}, {})",
                self.name,
                descriptor.name,
                descriptor.input_units,
                descriptor.output_units,
                descriptor.activation
            );
            network.add_layer(descriptor.build_with_rng(rng)?)?;
        }
        Ok(network)
    }

    pub fn from_network(network: &Network) -> Self {
        NetworkSchema {
            name: network.name().to_string(),
            layers: network
                .layers()
                .iter()
                .map(LayerDescriptor::from_layer)
                .collect(),
        }
    }
}
