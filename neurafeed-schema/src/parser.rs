use crate::descriptor::{LayerDescriptor, NetworkSchema};
use crate::error::SchemaError;
use crate::tokens::Token;
use log::{debug, warn};
use neurafeed_core::activation;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads and parses a schema file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<NetworkSchema, SchemaError> {
    let path = path.as_ref();
    debug!("Loading network schema from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parses schema text: a `nome=` line naming the network, then one layer per
/// non-blank line.
///
/// # Errors
/// `MissingNetworkName` if the first non-blank line is not a `nome=` line,
/// `MissingToken` for a layer line lacking a mandatory token, `InvalidNumber`
/// and `WeightCount` for malformed values and `Network` for an activation
/// name the catalog does not know.
pub fn parse_str(text: &str) -> Result<NetworkSchema, SchemaError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let name = match lines.next() {
        Some((_, line)) => line
            .strip_prefix(Token::Name.as_str())
            .ok_or(SchemaError::MissingNetworkName)?
            .trim()
            .to_string(),
        None => return Err(SchemaError::MissingNetworkName),
    };

    let layers = lines
        .map(|(line_no, line)| parse_layer(line_no, line))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Parsed network '{}' with {} layers", name, layers.len());
    Ok(NetworkSchema { name, layers })
}

/// Splits a layer line on whitespace, keeping a bracketed `weights=` value in
/// one piece even if it contains spaces.
fn fragments(line: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut depth: i32 = 0;
    for piece in line.split_whitespace() {
        if depth > 0 {
            if let Some(last) = out.last_mut() {
                last.push_str(piece);
            }
        } else {
            out.push(piece.to_string());
        }
        depth += piece.matches('[').count() as i32 - piece.matches(']').count() as i32;
    }
    out
}

fn parse_layer(line_no: usize, line: &str) -> Result<LayerDescriptor, SchemaError> {
    let mut fields: HashMap<Token, String> = HashMap::new();
    for fragment in fragments(line) {
        match Token::split(&fragment) {
            Some((token, value)) => {
                fields.insert(token, value.to_string());
            }
            None => warn!("Line {}: ignoring unknown fragment '{}'", line_no, fragment),
        }
    }

    let missing = |token: Token| SchemaError::MissingToken {
        line: line_no,
        token: token.as_str(),
    };
    if let Some(&token) = Token::ALL
        .iter()
        .find(|token| token.is_mandatory() && !fields.contains_key(*token))
    {
        return Err(missing(token));
    }
    let field = |token: Token| fields.get(&token).ok_or_else(|| missing(token));

    let name = field(Token::Name)?.clone();
    let activation_name = field(Token::ActivationFunction)?.clone();
    let input_units = parse_count(line_no, field(Token::InputUnits)?)?;
    let output_units = parse_count(line_no, field(Token::OutputUnits)?)?;

    activation::lookup(&activation_name)?;
    let weights = fields
        .get(&Token::Weights)
        .map(|value| {
            let values = parse_values(line_no, value)?;
            LayerDescriptor::split_rows(&name, input_units, output_units, &values)
        })
        .transpose()?;

    debug!(
        "Line {}: layer '{}' {} -> {} ({}), weights {}",
        line_no,
        name,
        input_units,
        output_units,
        activation_name,
        if weights.is_some() { "given" } else { "random" }
    );
    Ok(LayerDescriptor {
        name,
        activation: activation_name,
        input_units,
        output_units,
        weights,
    })
}

fn parse_count(line_no: usize, value: &str) -> Result<usize, SchemaError> {
    value.parse().map_err(|_| SchemaError::InvalidNumber {
        line: line_no,
        value: value.to_string(),
    })
}

/// Flattens `[[a,b],[c,d]]` into `[a, b, c, d]`.
fn parse_values(line_no: usize, value: &str) -> Result<Vec<f64>, SchemaError> {
    let flat: String = value.chars().filter(|c| *c != '[' && *c != ']').collect();
    flat.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>().map_err(|_| SchemaError::InvalidNumber {
                line: line_no,
                value: item.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
