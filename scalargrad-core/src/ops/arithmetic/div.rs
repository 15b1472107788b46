use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Divides `a` by `b`.
///
/// Backward (default [`DivisionRule::Exact`](crate::DivisionRule::Exact)):
/// `a` receives `g / b` and `b` receives `-a / b² · g`.
///
/// # Errors
/// Returns `ScalarGradError::DivisionByZero` if `b` is zero.
pub fn div_op(a: impl Into<Value>, b: impl Into<Value>) -> Result<Value, ScalarGradError> {
    let (a, b) = (a.into(), b.into());
    let denominator = b.data();
    if denominator == 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            operation: "div_op".to_string(),
        });
    }
    let data = a.data() / denominator;
    Ok(Value::from_op(data, Op::Div, vec![a, b]))
}

impl Value {
    /// `self / other`. See [`div_op`].
    pub fn div(&self, other: impl Into<Value>) -> Result<Value, ScalarGradError> {
        div_op(self, other)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
