use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// A transcendental operator was applied outside its mathematical domain
    /// (e.g. `ln` of a non-positive value).
    #[error("Domain error in {operation}: input {value} is invalid ({reason})")]
    DomainError {
        operation: String,
        value: f64,
        reason: String,
    },

    /// A zero denominator was met, either in a forward division or while
    /// evaluating a reciprocal-style local derivative during backward.
    #[error("Division by zero error in {operation}")]
    DivisionByZero { operation: String },

    /// An argument had the wrong kind, e.g. a graph node used as a `pow` exponent.
    #[error("Type constraint violated in {operation}: {message}")]
    TypeConstraint { operation: String, message: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Internal error: {0}")]
    InternalError(String),
}
