use crate::autograd::Op;
use crate::value::Value;

/// Adds two nodes.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    let (a, b) = (a.into(), b.into());
    let data = a.data() + b.data();
    Value::from_op(data, Op::Add, vec![a, b])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
