//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph built by [`crate::ops`].
//!
//! - [`Op`] tags every node with the operator that produced it, and
//!   `backward_op::accumulate` is the dispatch table of local derivatives.
//! - [`graph::topological_sort`] orders the nodes reachable from an output.
//! - [`grad_check::check_grad`] compares analytical gradients with finite differences.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub(crate) use backward_op::{accumulate, Adjoints};
pub use graph::{topological_sort, trace};
