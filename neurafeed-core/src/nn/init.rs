use rand::Rng;

/// Draws `len` independent values uniformly from `[0, 1)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// Fills `values` in-place with independent draws from `[0, 1)`.
pub fn uniform_<R: Rng + ?Sized>(rng: &mut R, values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = rng.gen::<f64>();
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
