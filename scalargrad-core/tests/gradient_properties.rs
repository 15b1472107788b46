use approx::{assert_relative_eq, relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::ops::{div_op, ln_op, pow_op};
use scalargrad_core::{check_grad, ScalarGradError, Value};

mod common;
use common::{central_difference, init_logger};

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-4;

fn cubic(x: &Value) -> Value {
    &(&(x * x) * x) + &(&(2.0 * x) - 1.0)
}

fn tanh_affine(x: &Value) -> Value {
    (&(x * 0.5) + 1.0).tanh()
}

fn sigmoid_times_x(x: &Value) -> Value {
    &x.sigmoid() * x
}

fn scaled_relu(x: &Value) -> Value {
    &x.relu() * 3.0
}

fn log_of_square_plus_one(x: &Value) -> Value {
    ln_op(&(&(x * x) + 1.0)).expect("argument is positive")
}

fn rational(x: &Value) -> Value {
    let num = pow_op(x, 3.0).expect("constant exponent");
    div_op(&num, &(x + 5.0)).expect("denominator is non-zero")
}

fn reciprocal_square(x: &Value) -> Value {
    pow_op(x, -2.0).expect("base is non-zero")
}

type UnaryCase = (&'static str, fn(&Value) -> Value, (f64, f64));

/// Single-input expressions paired with the range they are sampled from.
/// Ranges keep clear of kinks (ReLU at 0) and of domain boundaries.
fn unary_cases() -> [UnaryCase; 8] {
    [
        ("cubic", cubic, (-3.0, 3.0)),
        ("tanh_affine", tanh_affine, (-4.0, 4.0)),
        ("sigmoid_times_x", sigmoid_times_x, (-5.0, 5.0)),
        ("relu_positive", scaled_relu, (0.5, 4.0)),
        ("relu_negative", scaled_relu, (-4.0, -0.5)),
        ("log_of_square_plus_one", log_of_square_plus_one, (-3.0, 3.0)),
        ("rational", rational, (0.5, 2.0)),
        ("reciprocal_square", reciprocal_square, (0.5, 3.0)),
    ]
}

#[test]
fn test_finite_difference_agreement() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for (name, f, (low, high)) in unary_cases() {
        for _ in 0..20 {
            let x0 = rng.gen_range(low..high);
            let x = Value::new(x0);
            f(&x).backward().unwrap();
            let numerical = central_difference(f, x0, EPS);
            assert!(
                relative_eq!(x.grad(), numerical, epsilon = TOL, max_relative = TOL),
                "{}: analytical {} != numerical {} at x = {}",
                name,
                x.grad(),
                numerical,
                x0
            );
        }
    }
}

#[test]
fn test_check_grad_multivariate() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let inputs: Vec<f64> = (0..3).map(|_| rng.gen_range(0.5..2.0)).collect();
        // f(x, y, z) = tanh(x*y) + ln(z) * sigmoid(x) - y / z
        let func = |v: &[Value]| -> Result<Value, ScalarGradError> {
            let xy = (&v[0] * &v[1]).tanh();
            let lz = &v[2].log()? * &v[0].sigmoid();
            let ratio = div_op(&v[1], &v[2])?;
            Ok(&(&xy + &lz) - &ratio)
        };
        let result = check_grad(func, &inputs, EPS, TOL, TOL);
        assert!(result.is_ok(), "at {:?}: {:?}", inputs, result.err());
    }
}

#[test]
fn test_additivity_under_sharing() {
    // r = p1(x) + p2(x); dr/dx must be the sum of the two path derivatives.
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let x0: f64 = rng.gen_range(-2.0..2.0);
        let x = Value::new(x0);
        let path1 = (&x * 3.0).tanh();
        let path2 = &x * &x;
        let r = &path1 + &path2;
        r.backward().unwrap();

        let d_path1 = 3.0 * (1.0 - (3.0 * x0).tanh().powi(2));
        let d_path2 = 2.0 * x0;
        assert_relative_eq!(x.grad(), d_path1 + d_path2, epsilon = 1e-12);
    }
}

#[test]
fn test_topological_order_puts_operands_first() {
    let x = Value::new(0.3);
    let y = Value::new(-1.2);
    let shared = &x * &y;
    let root = &(&shared.tanh() + &shared.sigmoid()) * &(&shared - &x);
    let order = root.topological_order().unwrap();

    assert!(order.last().unwrap().ptr_eq(&root));
    for (i, node) in order.iter().enumerate() {
        for operand in node.operands() {
            let j = order
                .iter()
                .position(|n| n.ptr_eq(&operand))
                .expect("operand missing from order");
            assert!(j < i, "operand at {} not before consumer at {}", j, i);
        }
    }
    assert_eq!(order.iter().filter(|n| n.ptr_eq(&shared)).count(), 1);
}
