use crate::autograd::Op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Backward: the gradient passes through when the output is positive and is
/// blocked otherwise (including at exactly zero).
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x < 0.0 { 0.0 } else { x };
    Value::from_op(data, Op::Relu, vec![a.clone()])
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
