use scalargrad_core::{Graph, Value};

// Each integration test file compiles this module separately, so not every helper is
// used everywhere.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one leaf per entry of `data`, in order.
#[allow(dead_code)]
pub fn leaves(graph: &Graph, data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| graph.value(x)).collect()
}
