// src/value_data.rs
use crate::autograd::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for one scalar node of the computation graph.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by [`Value`] so that a node can be shared by
/// every downstream node that uses it as an operand, while its gradient stays
/// mutable through a shared reference.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result. Never changes after construction.
    pub(crate) data: f64,
    /// Accumulated `d(output)/d(self)`. Starts at 0.0.
    pub(crate) grad: f64,
    /// Operator that produced this node. Drives the backward dispatch.
    pub(crate) op: Op,
    /// Predecessors, in the order the operator received them.
    pub(crate) operands: Vec<Value>,
    /// Cosmetic name, used by graph printers only.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates a leaf: no operands, zero gradient.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            operands: Vec::new(),
            label: None,
        }
    }

    /// Creates the result of `op` applied to `operands`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}

impl Drop for ValueData {
    // The default drop recurses once per node of a chain, which overflows the stack
    // for long graphs. Detach uniquely owned operands and free them from a work list.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}
