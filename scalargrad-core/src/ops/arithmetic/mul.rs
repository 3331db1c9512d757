use crate::autograd::{BackwardOp, GradFn};
use crate::error::ScalarGradError;
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::traits::ScalarNumeric;
use crate::ops::{apply_binary_op, coerce, Operand};
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward context for `a * b`.
#[derive(Debug, Clone)]
pub(crate) struct MulBackward {
    pub(crate) a: NodeId,
    pub(crate) b: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for MulBackward {
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T> {
        let a_data = graph[self.a].data;
        let b_data = graph[self.b].data;
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![b_data * output.grad, a_data * output.grad]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

// --- Forward Operation ---

pub(crate) fn mul_values<T: ScalarNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    apply_binary_op(a, b, |x, y| x * y, |a, b| GradFn::Mul(MulBackward { a, b }))
}

/// Multiplies two scalars: `a * b`.
///
/// # Errors
/// [`ScalarGradError::GraphMismatch`] if `b` is a node of a different graph.
pub fn mul_op<'b, T: ScalarNumeric>(
    a: &Value<T>,
    b: impl Into<Operand<'b, T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = coerce(a, b, "mul_op")?;
    Ok(mul_values(a, &b))
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
