use crate::autograd::graph::NodeId;
use crate::config::{BackwardConfig, DivisionRule};
use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashMap;
use std::fmt;

/// Tag recording which operator produced a node.
///
/// The backward pass dispatches on this tag, see [`accumulate`].
/// Negation and subtraction have no tag of their own: they are built from `Mul`
/// and `Add`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Div,
    /// Power with a constant exponent.
    Pow(f64),
    Log,
    Tanh,
    Relu,
    Sigmoid,
}

impl Op {
    /// Number of operands a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul | Op::Div => 2,
            Op::Pow(_) | Op::Log | Op::Tanh | Op::Relu | Op::Sigmoid => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Div => write!(f, "/"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Log => write!(f, "log"),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "ReLU"),
            Op::Sigmoid => write!(f, "sigmoid"),
        }
    }
}

/// Adjoints of a single backward pass, keyed by node identity.
pub(crate) type Adjoints = HashMap<NodeId, f64>;

/// Applies the local backward rule of one node.
///
/// `g` is the node's adjoint in the current pass. Adds `g · d(node)/d(operand)` to
/// the adjoint of every operand in `adjoints`, so a node used by several consumers
/// collects the sum of their contributions. Stored gradients are not touched here.
pub(crate) fn accumulate(
    node: &ValueData,
    g: f64,
    config: &BackwardConfig,
    adjoints: &mut Adjoints,
) -> Result<(), ScalarGradError> {
    let mut add_grad = |operand: &Value, delta: f64| {
        *adjoints.entry(operand.node_id()).or_insert(0.0) += delta;
    };
    match (node.op, node.operands.as_slice()) {
        (Op::Leaf, []) => {}
        (Op::Add, [a, b]) => {
            add_grad(a, g);
            add_grad(b, g);
        }
        (Op::Mul, [a, b]) => {
            let (a_val, b_val) = (a.data(), b.data());
            add_grad(a, b_val * g);
            add_grad(b, a_val * g);
        }
        (Op::Div, [a, b]) => {
            let (a_val, b_val) = (a.data(), b.data());
            if b_val == 0.0 {
                return Err(ScalarGradError::DivisionByZero {
                    operation: "div_backward".to_string(),
                });
            }
            let b_delta = match config.division_rule {
                DivisionRule::Exact => -a_val / (b_val * b_val) * g,
                DivisionRule::Legacy => {
                    if a_val == 0.0 {
                        return Err(ScalarGradError::DivisionByZero {
                            operation: "div_backward".to_string(),
                        });
                    }
                    (1.0 / a_val) * g
                }
            };
            add_grad(a, g / b_val);
            add_grad(b, b_delta);
        }
        (Op::Pow(exponent), [a]) => {
            let a_val = a.data();
            // a^(p-1) is a reciprocal of zero here.
            if a_val == 0.0 && exponent - 1.0 < 0.0 {
                return Err(ScalarGradError::DivisionByZero {
                    operation: "pow_backward".to_string(),
                });
            }
            add_grad(a, exponent * a_val.powf(exponent - 1.0) * g);
        }
        (Op::Log, [a]) => add_grad(a, (1.0 / a.data()) * g),
        (Op::Tanh, [a]) => {
            let t = node.data;
            add_grad(a, (1.0 - t * t) * g);
        }
        (Op::Relu, [a]) => add_grad(a, if node.data > 0.0 { g } else { 0.0 }),
        (Op::Sigmoid, [a]) => {
            let out = node.data;
            add_grad(a, out * (1.0 - out) * g);
        }
        (op, operands) => {
            return Err(ScalarGradError::InternalError(format!(
                "{:?} node holds {} operands, expected {}",
                op,
                operands.len(),
                op.arity()
            )))
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
