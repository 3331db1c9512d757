//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `relu_op`, ...)
//!   that computes the forward value, appends the output node to the graph, and attaches
//!   the local gradient rule. The `std::ops` impls and the methods on [`Value`] are thin
//!   wrappers around these functions.
//! - **`Backward` Structs:** Each primitive operation has a small struct (`AddBackward`,
//!   `PowBackward`, ...) holding the operand ids and constants its rule needs. Composite
//!   operations (`sub`, `neg`, `div`) are expressed through primitives and have none.
//! - **Coercion:** Binary operations accept any [`Operand`]: either an existing node or a
//!   raw number, which is lifted into a fresh leaf of the other operand's graph.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu.
//! - [`math_elem`]: exp, ln, tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

use crate::autograd::GradFn;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node_data::{NodeData, NodeId};
use crate::value::Value;
use traits::ScalarNumeric;

/// Operand of a binary operation: an existing node or a raw number.
#[derive(Debug, Clone)]
pub enum Operand<'a, T: ScalarNumeric> {
    Node(&'a Value<T>),
    Scalar(T),
}

impl<'a, T: ScalarNumeric> Operand<'a, T> {
    /// Lifts the operand into a node of `graph`.
    ///
    /// A node is returned unchanged (same identity); a raw number becomes a fresh
    /// parent-less leaf.
    ///
    /// # Errors
    /// [`ScalarGradError::GraphMismatch`] if the node belongs to another graph.
    pub fn into_value(self, graph: &Graph<T>, operation: &str) -> Result<Value<T>, ScalarGradError> {
        match self {
            Operand::Node(value) if value.graph().ptr_eq(graph) => Ok(value.clone()),
            Operand::Node(_) => Err(ScalarGradError::GraphMismatch {
                operation: operation.to_string(),
            }),
            Operand::Scalar(data) => Ok(graph.value(data)),
        }
    }
}

impl<'a, T: ScalarNumeric> From<&'a Value<T>> for Operand<'a, T> {
    fn from(value: &'a Value<T>) -> Self {
        Operand::Node(value)
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(data: $t) -> Self {
                    Operand::Scalar(data)
                }
            }
        )*
    };
}

impl_operand_from_scalar!(f32, f64);

/// Applies a binary operation whose operands already live in the same graph.
///
/// Computes `forward(a.data, b.data)`, appends the output node, and attaches the rule
/// produced by `backward_builder(a.id, b.id)`.
pub(crate) fn apply_binary_op<T, F, B>(
    a: &Value<T>,
    b: &Value<T>,
    forward: F,
    backward_builder: B,
) -> Value<T>
where
    T: ScalarNumeric,
    F: FnOnce(T, T) -> T,
    B: FnOnce(NodeId, NodeId) -> GradFn<T>,
{
    debug_assert!(a.graph().ptr_eq(b.graph()), "operands must share a graph");
    let output_data = forward(a.data(), b.data());
    let grad_fn = backward_builder(a.id(), b.id());
    a.graph().insert(NodeData::new(output_data, Some(grad_fn), ""))
}

/// Applies a unary operation: `forward(a.data)` with the rule from `backward_builder(a.id)`.
pub(crate) fn apply_unary_op<T, F, B>(a: &Value<T>, forward: F, backward_builder: B) -> Value<T>
where
    T: ScalarNumeric,
    F: FnOnce(T) -> T,
    B: FnOnce(NodeId) -> GradFn<T>,
{
    let output_data = forward(a.data());
    let grad_fn = backward_builder(a.id());
    a.graph().insert(NodeData::new(output_data, Some(grad_fn), ""))
}

/// Coerces the right-hand operand of a binary operation into `a`'s graph.
pub(crate) fn coerce<'b, T: ScalarNumeric>(
    a: &Value<T>,
    b: impl Into<Operand<'b, T>>,
    operation: &str,
) -> Result<Value<T>, ScalarGradError> {
    let operand: Operand<'b, T> = b.into();
    operand.into_value(a.graph(), operation)
}
