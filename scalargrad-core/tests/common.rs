use scalargrad_core::Value;

/// Installs `env_logger` once per test binary. Safe to call from every test.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Central difference of `f` at `x`.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn central_difference<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(&Value) -> Value,
{
    let plus = f(&Value::new(x + eps)).data();
    let minus = f(&Value::new(x - eps)).data();
    (plus - minus) / (2.0 * eps)
}
