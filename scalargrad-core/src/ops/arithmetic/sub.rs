use crate::value::Value;

use super::{add_op, neg_op};

/// Subtracts `b` from `a`, built as `a + (-b)`.
pub fn sub_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
