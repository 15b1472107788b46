//! # scalargrad-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine.
//!
//! Expressions are built eagerly from [`Value`] nodes with the constructors in
//! [`ops`] (or the `+`, `-`, `*` operators and methods such as [`Value::tanh`]).
//! Every node records the operator that produced it and its operands, forming a
//! directed acyclic graph. [`Value::backward`] then seeds the output gradient with
//! 1.0 and propagates `d(output)/d(node)` into every reachable node.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let d = &(&a * &b) + &c;
//! let f = Value::new(-2.0);
//! let loss = &d * &f;
//! loss.backward().unwrap();
//! assert_eq!(a.grad(), 6.0);
//! assert_eq!(f.grad(), 4.0);
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;

pub use autograd::grad_check::{check_grad, GradCheckError};
pub use autograd::Op;
pub use config::{BackwardConfig, DivisionRule};
pub use error::ScalarGradError;
pub use ops::Exponent;
pub use value::{leaf, Value};
