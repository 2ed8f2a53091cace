//! Shared test utilities for fast-window tests.

/// Approximate equality for floats; two NaN values compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts two series are equal element-wise, treating NaN as equal to NaN.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(approx_eq(*a, *e, eps), "index {i}: got {a}, expected {e}");
    }
}

/// Bitwise equality, NaN payloads included.
#[allow(dead_code)]
pub fn bits_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

/// Deterministic pseudo-random series for larger tests.
#[allow(dead_code)]
pub fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut value = 100.0;
    for i in 0..size {
        value += (i as f64 * 0.1).sin() * 2.0 + (i as f64 * 0.03).cos() * 1.5;
        data.push(value);
    }
    data
}

/// Installs `env_logger` once so `RUST_LOG=debug` shows apply logs.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
