use crate::autograd::{accumulate, Adjoints};
use crate::autograd::graph::topological_sort;
use crate::config::{BackwardConfig, DivisionRule};
use crate::error::ScalarGradError;
use crate::value::Value;
use log::{debug, warn};

impl Value {
    /// Performs the backward pass starting from this node, with the default
    /// [`BackwardConfig`].
    ///
    /// See [`Value::backward_with`].
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with(&BackwardConfig::default())
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Orders all reachable nodes topologically and applies each node's local rule
    /// from the output back to the leaves. Adjoints are collected per pass and only
    /// added to the stored gradients once the whole pass has succeeded; on error no
    /// gradient is modified. This node's gradient is set to 1.0 (overwriting, this is
    /// the seed), every other reached node has its gradient increased by its adjoint.
    /// Calling `backward` on several outputs that share a subgraph therefore sums
    /// their contributions, and zeroing between training steps is up to the caller.
    ///
    /// # Errors
    /// * `CycleDetected` if the graph is not acyclic.
    /// * `DivisionByZero` if a reciprocal-style local derivative meets a zero.
    /// * `InternalError` if a node is borrowed elsewhere during the pass.
    pub fn backward_with(&self, config: &BackwardConfig) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self)?;
        debug!(
            "backward: {} nodes reachable from {:#x}",
            sorted_nodes.len(),
            self.id()
        );
        if config.division_rule == DivisionRule::Legacy {
            warn!("backward: using the legacy division rule, denominator gradients are not exact");
        }

        let mut adjoints = Adjoints::with_capacity(sorted_nodes.len());
        adjoints.insert(self.node_id(), 1.0);

        // Iterate in reverse topological order: consumers before their operands.
        for node in sorted_nodes.iter().rev() {
            let g = adjoints.get(&node.node_id()).copied().unwrap_or(0.0);
            let node_data = node.data.try_borrow().map_err(|_| {
                ScalarGradError::InternalError(
                    "Failed to borrow node during backward traversal".to_string(),
                )
            })?;
            accumulate(&node_data, g, config, &mut adjoints)?;
        }

        for node in &sorted_nodes {
            let mut guard = node.data.try_borrow_mut().map_err(|_| {
                ScalarGradError::InternalError(
                    "Failed to borrow node mutably for grad accumulation".to_string(),
                )
            })?;
            if node.ptr_eq(self) {
                guard.grad = 1.0;
            } else if let Some(delta) = adjoints.get(&node.node_id()) {
                guard.grad += delta;
            }
        }

        debug!("backward: done");
        Ok(())
    }

    /// Nodes reachable from this one, each after all of its operands.
    pub fn topological_order(&self) -> Result<Vec<Value>, ScalarGradError> {
        topological_sort(self)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
