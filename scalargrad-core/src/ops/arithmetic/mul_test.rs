use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_mul_forward() {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(-3.5);
    let c = mul_op(&a, &b).unwrap();
    assert_eq!(c.data(), -7.0);
    assert_eq!(c.op_tag(), "*");
}

#[test]
fn test_mul_backward() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(3.0);
    let c = mul_op(&a, &b)?;
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mul_sampled_inputs() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let graph: Graph = Graph::new();
        let a = graph.value(rng.gen_range(-100.0..100.0));
        let b = graph.value(rng.gen_range(-100.0..100.0));
        let c = mul_op(&a, &b)?;
        assert_eq!(c.data(), a.data() * b.data());
        c.backward();
        assert_eq!(a.grad(), b.data());
        assert_eq!(b.grad(), a.data());
    }
    Ok(())
}

#[test]
fn test_mul_square_accumulates() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.value(-1.5);
    let y = mul_op(&x, &x)?;
    y.backward();
    // d(x*x)/dx = 2x
    assert_relative_eq!(x.grad(), -3.0);
    Ok(())
}

#[test]
fn test_mul_scalar_operand() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.value(4.0);
    let y = mul_op(&x, 0.25)?;
    assert_eq!(y.data(), 1.0);
    y.backward();
    assert_eq!(x.grad(), 0.25);
    Ok(())
}

#[test]
fn test_mul_grad_check() {
    let func = |x: &[Value]| mul_op(&x[0], &x[1]);
    let result = check_grad(func, &[1.25, -0.8], &GradCheckConfig::default());
    assert!(result.is_ok(), "Mul grad check failed: {:?}", result.err());
}
