use crate::autograd::{BackwardOp, GradFn};
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::apply_unary_op;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Backward context for `base ** exponent` with a constant exponent.
#[derive(Debug, Clone)]
pub(crate) struct PowBackward<T: ScalarNumeric> {
    pub(crate) base: NodeId,
    pub(crate) exponent: T,
}

impl<T: ScalarNumeric> BackwardOp<T> for PowBackward<T> {
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot p \cdot a^{p-1} \\]
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T> {
        let base = graph[self.base].data;
        let p = self.exponent;
        vec![p * base.powf(p - T::one()) * output.grad]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.base]
    }
}

/// Raises a scalar to a constant real power: `a ** exponent`.
///
/// The exponent is a plain number, not a node, so no gradient flows to it.
///
/// # Domain Considerations
/// Follows `Float::powf`: a negative base with a fractional exponent yields `NaN`,
/// and `0 ** -1` yields `inf`. Neither is reported as an error.
pub fn pow_op<T: ScalarNumeric>(a: &Value<T>, exponent: T) -> Value<T> {
    apply_unary_op(
        a,
        |x| x.powf(exponent),
        |base| GradFn::Pow(PowBackward { base, exponent }),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
