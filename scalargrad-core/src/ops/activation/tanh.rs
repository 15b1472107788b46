use crate::autograd::Op;
use crate::value::Value;

/// Hyperbolic tangent, `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// Evaluated with `f64::tanh`, which agrees with the closed form and stays finite
/// where `e^{2x}` overflows. Backward: the operand receives `(1 - t²) · g`.
pub fn tanh_op(a: &Value) -> Value {
    let t = a.data().tanh();
    Value::from_op(t, Op::Tanh, vec![a.clone()])
}

impl Value {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
