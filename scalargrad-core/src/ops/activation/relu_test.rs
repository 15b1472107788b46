use super::*;
use crate::ops::mul_op;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        assert_eq!(relu_op(&Value::new(*x)).data(), *e);
    }
}

#[test]
fn test_relu_backward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected_grad = [0.0, 0.0, 0.0, 1.0, 1.0];
    for (x, e) in inputs.iter().zip(expected_grad.iter()) {
        let leaf = Value::new(*x);
        leaf.relu().backward().unwrap();
        assert_eq!(leaf.grad(), *e, "relu grad at {}", x);
    }
}

#[test]
fn test_relu_backward_chain() {
    // relu(x * 2)
    let x = Value::new(1.0);
    let y = mul_op(&x, 2.0);
    let z = y.relu();
    assert_eq!(z.data(), 2.0);
    z.backward().unwrap();
    assert_eq!(x.grad(), 2.0);
}
