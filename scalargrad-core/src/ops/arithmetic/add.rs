// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::{BackwardOp, GradFn};
use crate::error::ScalarGradError;
use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::traits::ScalarNumeric;
use crate::ops::{apply_binary_op, coerce, Operand};
use crate::value::Value;

// --- Backward Operation ---

/// Backward context for `a + b`: both operands receive the output gradient unchanged.
#[derive(Debug, Clone)]
pub(crate) struct AddBackward {
    pub(crate) a: NodeId,
    pub(crate) b: NodeId,
}

impl<T: ScalarNumeric> BackwardOp<T> for AddBackward {
    fn backward(&self, output: &NodeData<T>, _graph: &GraphData<T>) -> Vec<T> {
        vec![output.grad, output.grad]
    }

    fn input_ids(&self) -> Vec<NodeId> {
        vec![self.a, self.b]
    }
}

// --- Forward Operation ---

pub(crate) fn add_values<T: ScalarNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    apply_binary_op(a, b, |x, y| x + y, |a, b| GradFn::Add(AddBackward { a, b }))
}

/// Adds two scalars: `a + b`.
///
/// `b` may be another node of the same graph or a raw number.
///
/// # Errors
/// [`ScalarGradError::GraphMismatch`] if `b` is a node of a different graph.
pub fn add_op<'b, T: ScalarNumeric>(
    a: &Value<T>,
    b: impl Into<Operand<'b, T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = coerce(a, b, "add_op")?;
    Ok(add_values(a, &b))
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
