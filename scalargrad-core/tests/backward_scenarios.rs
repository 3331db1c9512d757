use approx::assert_relative_eq;
use scalargrad_core::utils::testing::check_grads_near;
use scalargrad_core::Graph;

mod common;
use common::{init_logger, leaves};

#[test]
fn test_add_then_reset_then_polynomial() {
    init_logger();
    let graph: Graph = Graph::new();
    let a = graph.value_with_label(-4.0, "a");
    let b = graph.value_with_label(2.0, "b");
    let c = &a + &b;
    let d = &a * &b + b.pow(3.0);
    assert_eq!(c.data(), -2.0);
    assert_eq!(d.data(), 0.0);

    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);

    graph.zero_grad();
    d.backward();
    // dd/da = b, dd/db = a + 3b^2
    assert_eq!(a.grad(), 2.0);
    assert_eq!(b.grad(), 8.0);
}

#[test]
fn test_mixed_expression_matches_reference() {
    let graph: Graph = Graph::new();
    let x = graph.value(-4.0);
    let z = 2.0 * &x + 2.0 + &x;
    let q = z.relu() + &z * &x;
    let h = (&z * &z).relu();
    let y = &h + &q + &q * &x;
    y.backward();
    assert_eq!(y.data(), -20.0);
    assert_relative_eq!(x.grad(), 46.0, epsilon = 1e-9);
}

#[test]
fn test_long_expression_matches_reference() {
    let graph: Graph = Graph::new();
    let a = graph.value(-4.0);
    let b = graph.value(2.0);
    let c = &a + &b;
    let d = &a * &b + b.pow(3.0);
    let c = &c + (&c + 1.0);
    let c = &c + (1.0 + &c + (-&a));
    let d = &d + (&d * 2.0 + (&b + &a).relu());
    let d = &d + (3.0 * &d + (&b - &a).relu());
    let e = &c - &d;
    let f = e.pow(2.0);
    let g = &f / 2.0;
    let g = &g + 10.0 / &f;
    g.backward();

    assert_relative_eq!(g.data(), 24.70408163265306, max_relative = 1e-9);
    assert_relative_eq!(a.grad(), 138.83381924198252, max_relative = 1e-9);
    assert_relative_eq!(b.grad(), 645.5772594752186, max_relative = 1e-9);
}

#[test]
fn test_relu_chain_rule() {
    let graph: Graph = Graph::new();
    let x = graph.value(2.0);
    let y = (&x * 3.0 + 1.0).relu() * 2.0;
    assert_eq!(y.data(), 14.0);
    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_shared_subexpression_gets_every_contribution() {
    let graph: Graph = Graph::new();
    let x = graph.value(3.0);
    let y = &x + &x;
    y.backward();
    assert_eq!(x.grad(), 2.0);

    // Diamond: s feeds both operands of the product.
    graph.zero_grad();
    let s = &x * 2.0;
    let out = &s * &s;
    out.backward();
    assert_eq!(s.grad(), 12.0);
    assert_eq!(x.grad(), 24.0);
}

#[test]
fn test_grouping_does_not_change_results() {
    let data = [1.5, -2.0, 4.0];

    let left: Graph = Graph::new();
    let l = leaves(&left, &data);
    let sum_left = (&l[0] + &l[1]) + &l[2];
    let prod_left = (&l[0] * &l[1]) * &l[2];
    let out_left = &sum_left + &prod_left;
    out_left.backward();

    let right: Graph = Graph::new();
    let r = leaves(&right, &data);
    let sum_right = &r[0] + (&r[1] + &r[2]);
    let prod_right = &r[0] * (&r[1] * &r[2]);
    let out_right = &sum_right + &prod_right;
    out_right.backward();

    assert_eq!(out_left.data(), out_right.data());
    let expected: Vec<f64> = l.iter().map(|v| v.grad()).collect();
    check_grads_near(&r, &expected, 1e-12);
}

#[test]
fn test_forward_is_repeatable() {
    let graph: Graph = Graph::new();
    let x = graph.value(0.3);
    let build = || (&x * 2.0).tanh() + x.exp();
    let first = build();
    let second = build();
    assert_eq!(first.data(), second.data());
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_long_chain_backward() {
    let graph: Graph = Graph::with_capacity(100_001);
    let x = graph.value(0.0);
    let mut y = x.clone();
    for _ in 0..50_000 {
        y = &y + 1.0;
    }
    assert_eq!(y.data(), 50_000.0);
    y.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_zero_grad_then_rerun_matches_fresh_pass() {
    let graph: Graph = Graph::new();
    let x = graph.value(1.2);
    let y = (&x * &x).exp() - x.ln();
    y.backward();
    let first = x.grad();
    // Stale interior gradients feed into the second pass.
    y.backward();
    assert!(x.grad() > 2.0 * first);

    y.zero_grad();
    y.backward();
    assert_eq!(x.grad(), first);
}
