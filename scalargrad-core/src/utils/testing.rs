use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Checks that the gradients of `values` match `expected` within `tolerance`.
/// Panics with the offending index if the lengths differ or any gradient is off.
pub fn check_grads_near<T: ScalarNumeric>(values: &[Value<T>], expected: &[T], tolerance: T) {
    assert_eq!(values.len(), expected.len(), "Gradient count mismatch");

    for (i, (value, &e)) in values.iter().zip(expected.iter()).enumerate() {
        let actual = value.grad();
        let diff = (actual - e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Routes `log` output through the test harness. Safe to call from every test.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_check_grads_near_accepts_close_values() {
        init_test_logger();
        let graph: Graph = Graph::new();
        let x = graph.value(2.0);
        let y = graph.value(-1.0);
        let z = &x * &y;
        z.backward();
        check_grads_near(&[x, y], &[-1.0, 2.0 + 1e-9], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch at index 0")]
    fn test_check_grads_near_reports_index() {
        let graph: Graph = Graph::new();
        let x = graph.value(2.0);
        check_grads_near(&[x], &[1.0], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch")]
    fn test_check_grads_near_rejects_nan() {
        let graph: Graph = Graph::new();
        let x = graph.value(-1.0);
        let y = x.pow(0.5);
        y.backward();
        check_grads_near(&[x], &[0.0], 1e-6);
    }
}
