// src/value/create.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates a leaf node. Same as [`Value::new`].
pub fn leaf(data: f64) -> Value {
    Value::new(data)
}

// Note: the random initializers below are what network layers use for their
// weights; the `_with` variants take a caller-provided RNG for seeded runs.

/// Leaf drawn uniformly from `[low, high)` on the thread RNG.
pub fn uniform(low: f64, high: f64) -> Result<Value, ScalarGradError> {
    uniform_with(&mut rand::thread_rng(), low, high)
}

/// Leaf drawn uniformly from `[low, high)` on `rng`.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the bounds are not finite or `low >= high`.
pub fn uniform_with<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
) -> Result<Value, ScalarGradError> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(ScalarGradError::DomainError {
            operation: "uniform".to_string(),
            value: low,
            reason: format!("invalid range [{}, {})", low, high),
        });
    }
    Ok(Value::new(rng.gen_range(low..high)))
}

/// Leaf drawn from `N(mean, std_dev²)` on the thread RNG.
pub fn randn(mean: f64, std_dev: f64) -> Result<Value, ScalarGradError> {
    randn_with(&mut rand::thread_rng(), mean, std_dev)
}

/// Leaf drawn from `N(mean, std_dev²)` on `rng`.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if `std_dev` is negative or not finite.
pub fn randn_with<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
) -> Result<Value, ScalarGradError> {
    // rand_distr accepts a negative std_dev and mirrors the distribution.
    if !(std_dev.is_finite() && std_dev >= 0.0) {
        return Err(ScalarGradError::DomainError {
            operation: "randn".to_string(),
            value: std_dev,
            reason: "standard deviation must be finite and non-negative".to_string(),
        });
    }
    let normal = Normal::new(mean, std_dev).map_err(|e| ScalarGradError::DomainError {
        operation: "randn".to_string(),
        value: std_dev,
        reason: e.to_string(),
    })?;
    Ok(Value::new(normal.sample(rng)))
}
