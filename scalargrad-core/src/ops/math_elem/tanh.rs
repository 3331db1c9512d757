use crate::autograd::{BackwardOp, GradFn};
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::apply_unary_op;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Backward context for `tanh(a)`; the rule only needs the output value.
#[derive(Debug, Clone)]
pub(crate) struct TanhBackward {
    pub(crate) input: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for TanhBackward {
    fn backward(&self, output: &NodeData<T>, _graph: &GraphData<T>) -> Vec<T> {
        let t = output.data;
        vec![(T::one() - t * t) * output.grad]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.input]
    }
}

/// Hyperbolic tangent of a scalar.
pub fn tanh_op<T: ScalarNumeric>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.tanh(), |input| GradFn::Tanh(TanhBackward { input }))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
