//! Options controlling a backward pass.

/// Local derivative used for the denominator of a division during backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionRule {
    /// `d(a/b)/db = -a / b²`.
    #[default]
    Exact,
    /// Historical rule that adds `(1/a) · g` to the denominator's gradient.
    /// Kept only for parity with results produced by earlier versions; it is not
    /// the derivative of `a/b`. A zero numerator fails with `DivisionByZero`.
    Legacy,
}

/// Configuration for [`Value::backward_with`](crate::Value::backward_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackwardConfig {
    pub division_rule: DivisionRule,
}

impl BackwardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_division_rule(mut self, division_rule: DivisionRule) -> Self {
        self.division_rule = division_rule;
        self
    }
}
