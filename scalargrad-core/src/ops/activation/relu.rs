use crate::autograd::{BackwardOp, GradFn};
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::apply_unary_op;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

// --- Backward Operation ---

/// Backward context for `relu(a)`.
#[derive(Debug, Clone)]
pub(crate) struct ReluBackward {
    pub(crate) input: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for ReluBackward {
    /// Passes the gradient through where the input was strictly positive, zero elsewhere
    /// (including at exactly 0).
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T> {
        let input = graph[self.input].data;
        let local = if input > T::zero() { output.grad } else { T::zero() };
        vec![local]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.input]
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(a, 0)`.
pub fn relu_op<T: ScalarNumeric>(a: &Value<T>) -> Value<T> {
    apply_unary_op(
        a,
        |x| if x > T::zero() { x } else { T::zero() },
        |input| GradFn::Relu(ReluBackward { input }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
