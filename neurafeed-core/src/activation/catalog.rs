use super::functions;
use crate::error::NeuraFeedError;

/// A named pair of scalar functions: the activation itself and its first
/// derivative. Gradient-based update rules need the derivative, so entries
/// without one (`step`) can only be trained by the perceptron rule.
#[derive(Debug, Clone, Copy)]
pub struct ActivationFunction {
    name: &'static str,
    forward: fn(f64) -> f64,
    derivative: Option<fn(f64) -> f64>,
}

impl ActivationFunction {
    pub const fn new(
        name: &'static str,
        forward: fn(f64) -> f64,
        derivative: Option<fn(f64) -> f64>,
    ) -> Self {
        ActivationFunction {
            name,
            forward,
            derivative,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the activation to a pre-activation value.
    pub fn apply(&self, x: f64) -> f64 {
        (self.forward)(x)
    }

    /// Applies the first derivative to a pre-activation value.
    ///
    /// # Errors
    /// Returns `NeuraFeedError::MissingDerivative` for functions without one.
    pub fn apply_derivative(&self, x: f64) -> Result<f64, NeuraFeedError> {
        match self.derivative {
            Some(f1) => Ok(f1(x)),
            None => Err(NeuraFeedError::MissingDerivative {
                function: self.name.to_string(),
            }),
        }
    }

    pub fn has_derivative(&self) -> bool {
        self.derivative.is_some()
    }
}

/// Every activation function known to the engine.
pub static CATALOG: &[ActivationFunction] = &[
    ActivationFunction::new("step", functions::step, None),
    ActivationFunction::new(
        "identity",
        functions::identity,
        Some(functions::identity_derivative),
    ),
    ActivationFunction::new(
        "logistic",
        functions::logistic,
        Some(functions::logistic_derivative),
    ),
    ActivationFunction::new(
        "sigmoid",
        functions::logistic,
        Some(functions::logistic_derivative),
    ),
    ActivationFunction::new("tanh", functions::tanh, Some(functions::tanh_derivative)),
    ActivationFunction::new("relu", functions::relu, Some(functions::relu_derivative)),
];

/// Resolves an activation function by name, ignoring ASCII case.
///
/// # Errors
/// Returns `NeuraFeedError::UnknownActivationFunction` when no entry matches.
pub fn lookup(name: &str) -> Result<&'static ActivationFunction, NeuraFeedError> {
    CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| NeuraFeedError::UnknownActivationFunction(name.to_string()))
}
