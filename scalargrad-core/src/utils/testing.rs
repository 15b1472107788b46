use crate::value::Value;

/// Checks that a node's value and gradient are within `tolerance` of the expected ones.
/// Panics with the offending field otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, expected_grad: f64, tolerance: f64) {
    let data_diff = (actual.data() - expected_data).abs();
    if !(data_diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected_data,
            data_diff,
            tolerance
        );
    }

    let grad_diff = (actual.grad() - expected_grad).abs();
    if !(grad_diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.grad(),
            expected_grad,
            grad_diff,
            tolerance
        );
    }
}

/// Helper to create a labelled leaf for testing purposes.
pub fn create_test_value(data: f64, label: &str) -> Value {
    Value::new(data).with_label(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value_near_passes() {
        let x = create_test_value(1.0, "x");
        x.set_grad(0.5);
        check_value_near(&x, 1.0 + 1e-9, 0.5, 1e-6);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch")]
    fn test_check_value_near_grad_mismatch() {
        let x = create_test_value(1.0, "x");
        check_value_near(&x, 1.0, 1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "Data mismatch")]
    fn test_check_value_near_nan() {
        let x = create_test_value(f64::NAN, "x");
        check_value_near(&x, 0.0, 0.0, 1e-6);
    }
}
