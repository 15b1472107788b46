// Builds a small neuron, runs the backward pass and prints the graph edge list,
// the way a graph visualizer would walk it.
//
// RUST_LOG=debug cargo run -p scalargrad-core --example expression_graph

use scalargrad_core::autograd::trace;
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let x1 = Value::new(2.0).with_label("x1");
    let x2 = Value::new(0.0).with_label("x2");
    let w1 = Value::new(-3.0).with_label("w1");
    let w2 = Value::new(1.0).with_label("w2");
    let b = Value::new(6.881_373_587_019_543).with_label("b");

    let n = (&(&(&x1 * &w1) + &(&x2 * &w2)) + &b).with_label("n");
    let o = n.tanh().with_label("o");
    o.backward()?;

    let (nodes, edges) = trace(&o)?;
    println!("nodes:");
    for node in &nodes {
        println!(
            "  {:>14x}  {:<4} data={:>9.4} grad={:>9.4} {}",
            node.id(),
            node.label().unwrap_or_default(),
            node.data(),
            node.grad(),
            node.op()
        );
    }
    println!("edges:");
    for (operand, consumer) in &edges {
        println!("  {:x} -> {:x}", operand.id(), consumer.id());
    }
    Ok(())
}
