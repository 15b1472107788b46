use super::*;
use crate::utils::testing::{check_value_near, create_test_value};

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-5.5);
    let c = add_op(&a, &b);
    assert_eq!(c.data(), -3.5);
    assert_eq!(c.op(), Op::Add);
    assert_eq!(c.grad(), 0.0);
    let operands = c.operands();
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&b));
}

#[test]
fn test_add_scalar_is_coerced_to_leaf() {
    let a = Value::new(1.0);
    let c = add_op(&a, 4.0);
    assert_eq!(c.data(), 5.0);
    let operands = c.operands();
    assert!(operands[1].is_leaf());
    assert_eq!(operands[1].data(), 4.0);
}

#[test]
fn test_add_backward() {
    let a = create_test_value(2.0, "a");
    let b = create_test_value(3.0, "b");
    let c = add_op(&a, &b);
    c.backward().unwrap();
    check_value_near(&c, 5.0, 1.0, 1e-12);
    check_value_near(&a, 2.0, 1.0, 1e-12);
    check_value_near(&b, 3.0, 1.0, 1e-12);
}

#[test]
fn test_add_same_node_twice() {
    let a = Value::new(3.0);
    let c = add_op(&a, &a);
    assert_eq!(c.data(), 6.0);
    c.backward().unwrap();
    assert_eq!(a.grad(), 2.0);
}
