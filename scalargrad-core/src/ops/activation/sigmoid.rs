use crate::autograd::Op;
use crate::value::Value;

/// Logistic function `1 / (1 + e^{-x})`.
///
/// Backward: the operand receives `out · (1 - out) · g`.
pub fn sigmoid_op(a: &Value) -> Value {
    let out = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(out, Op::Sigmoid, vec![a.clone()])
}

impl Value {
    /// See [`sigmoid_op`].
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
