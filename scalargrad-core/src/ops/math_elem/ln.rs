// scalargrad-core/src/ops/math_elem/ln.rs

use crate::autograd::{BackwardOp, GradFn};
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::apply_unary_op;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Backward pass structure for the natural logarithm.
///
/// Stores the input id, as the input value is needed to compute the gradient `1 / a`.
#[derive(Debug, Clone)]
pub(crate) struct LnBackward {
    pub(crate) input: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for LnBackward {
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T> {
        let input = graph[self.input].data;
        vec![output.grad / input]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.input]
    }
}

/// Computes the natural logarithm (base \( e \)) of a scalar.
///
/// # Domain Considerations
/// Returns `NaN` for negative inputs and `-inf` for zero, as `Float::ln` does.
pub fn ln_op<T: ScalarNumeric>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.ln(), |input| GradFn::Ln(LnBackward { input }))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
