// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// Backward: using \( \frac{dz}{da} = \frac{1}{a} \), the operand receives
/// \( \frac{g}{a} \).
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the input is zero or negative. NaN is
/// not rejected and propagates.
pub fn ln_op(a: &Value) -> Result<Value, ScalarGradError> {
    let x = a.data();
    if x <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "ln_op".to_string(),
            value: x,
            reason: "logarithm requires a strictly positive input".to_string(),
        });
    }
    Ok(Value::from_op(x.ln(), Op::Log, vec![a.clone()]))
}

impl Value {
    /// Natural logarithm. See [`ln_op`].
    pub fn log(&self) -> Result<Value, ScalarGradError> {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
