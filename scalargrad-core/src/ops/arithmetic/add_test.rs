use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let graph: Graph = Graph::new();
    let a = graph.value(1.5);
    let b = graph.value(-4.25);
    let c = add_op(&a, &b).unwrap();
    assert_eq!(c.data(), -2.75);
    assert_eq!(c.op_tag(), "+");
    assert_eq!(c.parents().len(), 2);
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(3.0);
    let c = add_op(&a, &b)?;
    c.backward();
    assert_eq!(c.grad(), 1.0);
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_scalar_operand() -> Result<(), ScalarGradError> {
    let graph: Graph<f32> = Graph::new();
    let a = graph.value(2.0);
    let c = add_op(&a, 0.5f32)?;
    assert_relative_eq!(c.data(), 2.5);
    // The constant became a fresh leaf of the same graph.
    assert_eq!(graph.len(), 3);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_node_twice() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.value(3.0);
    let y = add_op(&x, &x)?;
    assert_eq!(y.data(), 6.0);
    assert_eq!(y.parents().len(), 1);
    y.backward();
    assert_eq!(x.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_graph_mismatch() {
    let graph: Graph = Graph::new();
    let other: Graph = Graph::new();
    let a = graph.value(1.0);
    let b = other.value(1.0);
    let result = add_op(&a, &b);
    assert!(matches!(result, Err(ScalarGradError::GraphMismatch { .. })));
    // Nothing was appended to either graph.
    assert_eq!(graph.len(), 1);
    assert_eq!(other.len(), 1);
}

#[test]
fn test_add_grad_check() {
    let func = |x: &[Value]| add_op(&x[0], &x[1]);
    let result = check_grad(func, &[0.3, -1.7], &GradCheckConfig::default());
    assert!(result.is_ok(), "Add grad check failed: {:?}", result.err());
}
