use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Exponent argument of [`pow_op`].
///
/// Only constant exponents are differentiable here; a graph node is accepted at
/// the type level so callers can pass one, and is then rejected at runtime.
#[derive(Debug, Clone)]
pub enum Exponent {
    Scalar(f64),
    Node(Value),
}

impl From<f64> for Exponent {
    fn from(exponent: f64) -> Self {
        Exponent::Scalar(exponent)
    }
}

impl From<i32> for Exponent {
    fn from(exponent: i32) -> Self {
        Exponent::Scalar(f64::from(exponent))
    }
}

impl From<Value> for Exponent {
    fn from(node: Value) -> Self {
        Exponent::Node(node)
    }
}

impl From<&Value> for Exponent {
    fn from(node: &Value) -> Self {
        Exponent::Node(node.clone())
    }
}

/// Raises `base` to a constant power.
///
/// Backward: `base` receives `p · base^(p-1) · g`. At a zero base with `p < 1`
/// that factor is a reciprocal of zero and the backward pass fails with
/// `DivisionByZero`.
///
/// # Errors
/// * `TypeConstraint` if the exponent is a graph node.
/// * `DivisionByZero` if the base is zero and the exponent negative.
/// * `DomainError` if the base is negative and the exponent not an integer.
pub fn pow_op(
    base: impl Into<Value>,
    exponent: impl Into<Exponent>,
) -> Result<Value, ScalarGradError> {
    let base = base.into();
    let exponent = match exponent.into() {
        Exponent::Scalar(exponent) => exponent,
        Exponent::Node(node) => {
            return Err(ScalarGradError::TypeConstraint {
                operation: "pow_op".to_string(),
                message: format!(
                    "exponent must be a constant scalar, got a graph node with value {}",
                    node.data()
                ),
            })
        }
    };

    let x = base.data();
    if x == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::DivisionByZero {
            operation: "pow_op".to_string(),
        });
    }
    if x < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow_op".to_string(),
            value: x,
            reason: format!("negative base with non-integer exponent {}", exponent),
        });
    }

    let data = x.powf(exponent);
    Ok(Value::from_op(data, Op::Pow(exponent), vec![base]))
}

impl Value {
    /// `self ** exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
