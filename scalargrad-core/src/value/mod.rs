// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
pub mod create;
mod traits;

pub use create::{leaf, randn, randn_with, uniform, uniform_with};

/// One scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be the operand of many downstream nodes,
///     and clones of a `Value` are cheap handles to the same node.
/// 2.  **Interior Mutability:** the gradient accumulator can be updated through a
///     shared reference during the backward pass.
///
/// The graph is single-threaded; nothing here is `Send` or `Sync`.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with zero gradient and no operands.
    ///
    /// Any float is accepted. NaN and infinities are not validated and simply
    /// propagate through later operations.
    pub fn new(data: f64) -> Self {
        Value::from_data(ValueData::leaf(data))
    }

    pub(crate) fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Creates the node produced by `op` from `operands`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value::from_data(ValueData::from_op(data, op, operands))
    }

    /// Borrows the node data immutably.
    ///
    /// Panics if the node is currently borrowed mutably.
    pub fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node data mutably.
    ///
    /// Panics if the node is currently borrowed.
    pub fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// The forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// The accumulated gradient of the last backward output with respect to this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient. Optimizers use this after a step.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to 0.0. The engine never does this on its own.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// The operator that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Handles to the operands, in operator order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Builder-style variant of [`Value::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Opaque node identity, stable for the node's lifetime and shared by all clones.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.data) as usize
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
