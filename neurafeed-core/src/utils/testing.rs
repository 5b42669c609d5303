use crate::error::NeuraFeedError;
use crate::nn::{Layer, Neuron};

/// Checks that two vectors have the same length and that every element of
/// `actual` lies within `tolerance` of the matching element of `expected`.
/// Panics with the first offending index otherwise.
pub fn check_vec_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Builds a layer from explicit rows, each `[w0, .., wn, threshold]`.
pub fn layer_from_rows(
    name: &str,
    activation: &str,
    rows: &[&[f64]],
) -> Result<Layer, NeuraFeedError> {
    let mut layer = Layer::new(name, activation);
    for row in rows {
        let (threshold, weights) = match row.split_last() {
            Some((threshold, weights)) => (*threshold, weights.to_vec()),
            None => (0.0, Vec::new()),
        };
        layer.add_neuron(Neuron::new(weights, threshold))?;
    }
    Ok(layer)
}
