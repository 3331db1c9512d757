use crate::autograd::{BackwardOp, GradFn};
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::apply_unary_op;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Backward context for `exp(a)`. The local derivative is the output itself.
#[derive(Debug, Clone)]
pub(crate) struct ExpBackward {
    pub(crate) input: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for ExpBackward {
    fn backward(&self, output: &NodeData<T>, _graph: &GraphData<T>) -> Vec<T> {
        vec![output.data * output.grad]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.input]
    }
}

/// Computes `e ** a`.
pub fn exp_op<T: ScalarNumeric>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.exp(), |input| GradFn::Exp(ExpBackward { input }))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
