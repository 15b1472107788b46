use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;

/// Identity of a node: the address of its shared cell.
/// Only used as a map key, never dereferenced.
pub(crate) type NodeId = *const RefCell<ValueData>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the work stack; meeting it again means a back edge.
    InProgress,
    Done,
}

/// Orders every node reachable from `root` so that each node comes after all of
/// its operands. `root` is always last.
///
/// This is a post-order depth-first traversal driven by an explicit work stack, so
/// deep graphs (long chains from unrolled loops) do not grow the call stack. Shared
/// ancestors (diamonds in the DAG) appear exactly once.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if a node is reachable from itself.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // Each frame holds a node and the index of its next operand to visit.
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    marks.insert(root.node_id(), Mark::InProgress);

    while let Some(frame) = stack.last_mut() {
        let next_operand = {
            let guard = frame.0.data.try_borrow().map_err(|_| {
                ScalarGradError::InternalError(
                    "Failed to borrow node during topological sort".to_string(),
                )
            })?;
            guard.operands.get(frame.1).cloned()
        };
        frame.1 += 1;

        match next_operand {
            Some(operand) => {
                let operand_id = operand.node_id();
                match marks.get(&operand_id) {
                    Some(Mark::InProgress) => {
                        trace!("[topological_sort] back edge to {:?}", operand_id);
                        return Err(ScalarGradError::CycleDetected);
                    }
                    Some(Mark::Done) => {
                        trace!("[topological_sort] {:?} already visited", operand_id);
                    }
                    None => {
                        trace!("[topological_sort] visiting {:?}", operand_id);
                        marks.insert(operand_id, Mark::InProgress);
                        stack.push((operand, 0));
                    }
                }
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    trace!("[topological_sort] adding {:?} to sorted list", node.node_id());
                    marks.insert(node.node_id(), Mark::Done);
                    sorted_list.push(node);
                }
            }
        }
    }

    Ok(sorted_list)
}

/// Collects the nodes and the `(operand, consumer)` edges reachable from `root`,
/// for graph printers and visualizers. Nodes come in topological order.
pub fn trace(root: &Value) -> Result<(Vec<Value>, Vec<(Value, Value)>), ScalarGradError> {
    let nodes = topological_sort(root)?;
    let edges = nodes
        .iter()
        .flat_map(|node| {
            node.operands()
                .into_iter()
                .map(move |operand| (operand, node.clone()))
        })
        .collect();
    Ok((nodes, edges))
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
