use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_at_zero() {
    let x = Value::new(0.0);
    let y = x.sigmoid();
    y.backward().unwrap();
    assert_eq!(y.data(), 0.5);
    assert_eq!(x.grad(), 0.25);
}

#[test]
fn test_sigmoid_symmetry() {
    let pos = sigmoid_op(&Value::new(1.3)).data();
    let neg = sigmoid_op(&Value::new(-1.3)).data();
    assert_relative_eq!(pos + neg, 1.0, epsilon = 1e-12);
}

#[test]
fn test_sigmoid_large_negative_input() {
    let x = Value::new(-1000.0);
    let y = x.sigmoid();
    assert_eq!(y.data(), 0.0);
    y.backward().unwrap();
    assert_eq!(x.grad(), 0.0);
}
