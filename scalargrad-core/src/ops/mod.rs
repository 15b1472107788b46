//! # Operations Module (`ops`)
//!
//! Constructors that build new nodes of the scalar graph. Each one computes the
//! forward value eagerly and records an [`Op`](crate::autograd::Op) tag together
//! with its operands, which the backward pass later dispatches on.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** every operator has a free function (`add_op`, `ln_op`, ...).
//!   Binary constructors take `impl Into<Value>`, so a raw `f64` operand becomes a
//!   fresh leaf and a `&Value` is shared as-is.
//! - **Methods and operators:** `Value` forwards to these functions through
//!   `std::ops` overloads (`+`, `-`, `*`, unary `-`) and methods such as
//!   [`Value::relu`](crate::Value::relu). Fallible operators (division, power,
//!   logarithm) return `Result` and have no operator overload.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, neg, div, pow.
//! - [`math_elem`]: natural logarithm.
//! - [`activation`]: tanh, ReLU, sigmoid.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op, Exponent};
pub use math_elem::ln_op;
