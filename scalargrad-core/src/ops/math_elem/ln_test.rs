use super::*;
use crate::utils::testing::{check_value_near, create_test_value};
use approx::assert_relative_eq;

#[test]
fn test_ln_forward() {
    let x = Value::new(std::f64::consts::E);
    let y = x.log().unwrap();
    assert_relative_eq!(y.data(), 1.0);
    assert_eq!(y.op(), Op::Log);
}

#[test]
fn test_ln_backward() {
    let x = create_test_value(4.0, "x");
    let y = ln_op(&x).unwrap();
    y.backward().unwrap();
    check_value_near(&y, 4.0_f64.ln(), 1.0, 1e-12);
    check_value_near(&x, 4.0, 0.25, 1e-12);
}

#[test]
fn test_ln_domain_errors() {
    for bad in [0.0, -1.0, -0.0] {
        let result = ln_op(&Value::new(bad));
        match result {
            Err(ScalarGradError::DomainError { operation, value, .. }) => {
                assert_eq!(operation, "ln_op");
                assert_eq!(value, bad);
            }
            other => panic!("Expected DomainError for {}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_ln_nan_propagates() {
    let y = ln_op(&Value::new(f64::NAN)).unwrap();
    assert!(y.data().is_nan());
}
