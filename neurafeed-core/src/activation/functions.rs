//! Pure scalar activation functions and their first derivatives.

/// Heaviside step: 0 below zero, 1 otherwise.
pub fn step(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        1.0
    }
}

pub fn identity(x: f64) -> f64 {
    x
}

pub fn identity_derivative(_x: f64) -> f64 {
    1.0
}

/// Logistic sigmoid `1 / (1 + e^-x)`.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `f(x) * (1 - f(x))` with `f` the logistic sigmoid.
pub fn logistic_derivative(x: f64) -> f64 {
    let f = logistic(x);
    f * (1.0 - f)
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn tanh_derivative(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

/// ReLU(x) = max(0, x)
pub fn relu(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// 1 for positive inputs, 0 otherwise (including the boundary).
pub fn relu_derivative(x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod tests;
