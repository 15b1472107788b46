use crate::value::Value;

use super::mul_op;

/// Negates a node, built as `a * -1` so no dedicated backward rule is needed.
pub fn neg_op(a: impl Into<Value>) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
