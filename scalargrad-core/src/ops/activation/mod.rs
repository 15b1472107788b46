//! # Activation Functions
//!
//! Non-linearities used by network layers built on top of the engine.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html): logistic function.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
