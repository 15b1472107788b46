use crate::autograd::Op;
use crate::value::Value;

/// Multiplies two nodes.
///
/// Backward: each operand receives the output gradient scaled by the other
/// operand's value.
pub fn mul_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    let (a, b) = (a.into(), b.into());
    let data = a.data() * b.data();
    Value::from_op(data, Op::Mul, vec![a, b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
