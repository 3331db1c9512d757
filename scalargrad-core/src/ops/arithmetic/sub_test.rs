use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::graph::Graph;

#[test]
fn test_sub_forward_and_backward() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(5.0);
    let b = graph.value(2.0);
    let c = sub_op(&a, &b)?;
    assert_eq!(c.data(), 3.0);
    assert_eq!(c.op_tag(), "+");
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_scalar_operand() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(5.0);
    let c = sub_op(&a, 7.5)?;
    assert_eq!(c.data(), -2.5);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_rsub_is_not_commutative() {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let c = rsub_op(10.0, &a);
    assert_eq!(c.data(), 8.0);
    c.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(4.0);
    let c = sub_op(&a, &a)?;
    assert_eq!(c.data(), 0.0);
    c.backward();
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sub_grad_check() {
    let func = |x: &[Value]| sub_op(&x[0], &x[1]);
    let result = check_grad(func, &[0.4, 2.2], &GradCheckConfig::default());
    assert!(result.is_ok(), "Sub grad check failed: {:?}", result.err());
}
