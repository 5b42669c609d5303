use crate::descriptor::{LayerDescriptor, NetworkSchema};
use crate::error::SchemaError;
use crate::tokens::Token;
use neurafeed_core::Network;
use std::fmt;
use std::fs;
use std::path::Path;

/// Renders a network in the schema format, one layer per line.
///
/// Weights are written with at most one fractional digit, so only networks
/// whose weights already have that precision read back unchanged.
pub fn format_network(network: &Network) -> String {
    NetworkSchema::from_network(network).to_string()
}

/// Writes [`format_network`] output to `path`.
pub fn save<P: AsRef<Path>>(network: &Network, path: P) -> Result<(), SchemaError> {
    fs::write(path, format_network(network))?;
    Ok(())
}

/// `1.0 -> "1"`, `0.25 -> "0.2"`, `-0.04 -> "0"`.
pub fn format_weight(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    match rounded.strip_suffix(".0").unwrap_or(&rounded) {
        "-0" => "0".to_string(),
        short => short.to_string(),
    }
}

impl fmt::Display for LayerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {}{} {}{} {}{}",
            Token::StartLayer,
            Token::Name,
            self.name,
            Token::ActivationFunction,
            self.activation,
            Token::InputUnits,
            self.input_units,
            Token::OutputUnits,
            self.output_units
        )?;
        if let Some(rows) = &self.weights {
            let rows: Vec<String> = rows
                .iter()
                .map(|row| {
                    let values: Vec<String> = row.iter().copied().map(format_weight).collect();
                    format!("[{}]", values.join(","))
                })
                .collect();
            write!(f, " {}[{}]", Token::Weights, rows.join(","))?;
        }
        write!(f, " {}", Token::EndLayer)
    }
}

impl fmt::Display for NetworkSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Token::Name, self.name)?;
        for layer in &self.layers {
            write!(f, "\n{}", layer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurafeed_core::nn::{Layer, Neuron};

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(1.0), "1");
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(-2.3), "-2.3");
        assert_eq!(format_weight(0.96), "1");
        assert_eq!(format_weight(-0.04), "0");
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(12.0), "12");
    }

    #[test]
    fn test_format_network() -> Result<(), neurafeed_core::NeuraFeedError> {
        let mut hidden = Layer::new("hidden", "logistic");
        hidden.add_neuron(Neuron::new(vec![1.0, -1.0], 0.5))?;
        hidden.add_neuron(Neuron::new(vec![0.2, 0.3], 0.0))?;
        let mut output = Layer::new("output", "identity");
        output.add_neuron(Neuron::new(vec![2.0, 1.5], -0.5))?;
        let network = Network::from_layers("demo", vec![hidden, output])?;

        assert_eq!(
            format_network(&network),
            "nome=demo\n\
             layer={ nome=hidden activationFunction=logistic inputUnits=2 outputUnits=2 weights=[[1,-1,0.5],[0.2,0.3,0]] }\n\
             layer={ nome=output activationFunction=identity inputUnits=2 outputUnits=1 weights=[[2,1.5,-0.5]] }"
        );
        Ok(())
    }

    #[test]
    fn test_format_empty_network() {
        assert_eq!(format_network(&Network::new("nothing")), "nome=nothing");
    }

    #[test]
    fn test_descriptor_without_weights() {
        let descriptor = LayerDescriptor {
            name: "l".to_string(),
            activation: "tanh".to_string(),
            input_units: 3,
            output_units: 4,
            weights: None,
        };
        assert_eq!(
            descriptor.to_string(),
            "layer={ nome=l activationFunction=tanh inputUnits=3 outputUnits=4 }"
        );
    }
}
