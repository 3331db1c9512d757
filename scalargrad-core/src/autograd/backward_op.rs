use crate::graph::GraphData;
use crate::node_data::{NodeData, NodeId};
use crate::ops::activation::relu::ReluBackward;
use crate::ops::arithmetic::add::AddBackward;
use crate::ops::arithmetic::mul::MulBackward;
use crate::ops::arithmetic::pow::PowBackward;
use crate::ops::math_elem::exp::ExpBackward;
use crate::ops::math_elem::ln::LnBackward;
use crate::ops::math_elem::tanh::TanhBackward;
use crate::ops::traits::ScalarNumeric;
use std::fmt::Debug;

/// Defines the local gradient rule of a differentiable scalar operation.
///
/// Every node produced by an operation stores the rule in its `grad_fn` field; the
/// backward engine calls it once per pass, after every consumer of the node has already
/// contributed to the node's `grad`.
pub(crate) trait BackwardOp<T: ScalarNumeric>: Debug {
    /// Computes the contribution of `output.grad` to each operand's gradient.
    ///
    /// The returned `Vec` **must** match the order and length of [`input_ids`](Self::input_ids).
    /// Operands may repeat (`x * x`); the engine accumulates every entry, so a repeated
    /// operand receives the sum of its contributions.
    ///
    /// Only the `data` of `output` and of the direct operands may be read.
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T>;

    /// Returns the operand ids in forward-pass order, repeats included.
    fn input_ids(&self) -> Vec<NodeId>;
}

/// Closed set of local rules a node can carry.
///
/// Subtraction, negation and division have no variant: they are built from
/// [`Add`](GradFn::Add), [`Mul`](GradFn::Mul) and [`Pow`](GradFn::Pow) nodes and inherit
/// those rules.
#[derive(Debug, Clone)]
pub(crate) enum GradFn<T: ScalarNumeric> {
    Add(AddBackward),
    Mul(MulBackward),
    Pow(PowBackward<T>),
    Relu(ReluBackward),
    Exp(ExpBackward),
    Ln(LnBackward),
    Tanh(TanhBackward),
}

impl<T: ScalarNumeric> GradFn<T> {
    /// Operator symbol, used in text representations.
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            GradFn::Add(_) => "+",
            GradFn::Mul(_) => "*",
            GradFn::Pow(_) => "**",
            GradFn::Relu(_) => "ReLU",
            GradFn::Exp(_) => "exp",
            GradFn::Ln(_) => "ln",
            GradFn::Tanh(_) => "tanh",
        }
    }

    /// Name of the backward rule, e.g. `MulBackward`.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            GradFn::Add(_) => "AddBackward",
            GradFn::Mul(_) => "MulBackward",
            GradFn::Pow(_) => "PowBackward",
            GradFn::Relu(_) => "ReluBackward",
            GradFn::Exp(_) => "ExpBackward",
            GradFn::Ln(_) => "LnBackward",
            GradFn::Tanh(_) => "TanhBackward",
        }
    }
}

impl<T: ScalarNumeric> BackwardOp<T> for GradFn<T> {
    fn backward(&self, output: &NodeData<T>, graph: &GraphData<T>) -> Vec<T> {
        match self {
            GradFn::Add(op) => op.backward(output, graph),
            GradFn::Mul(op) => op.backward(output, graph),
            GradFn::Pow(op) => op.backward(output, graph),
            GradFn::Relu(op) => op.backward(output, graph),
            GradFn::Exp(op) => op.backward(output, graph),
            GradFn::Ln(op) => op.backward(output, graph),
            GradFn::Tanh(op) => op.backward(output, graph),
        }
    }

    fn input_ids(&self) -> Vec<NodeId> {
        match self {
            GradFn::Add(op) => BackwardOp::<T>::input_ids(op),
            GradFn::Mul(op) => BackwardOp::<T>::input_ids(op),
            GradFn::Pow(op) => op.input_ids(),
            GradFn::Relu(op) => BackwardOp::<T>::input_ids(op),
            GradFn::Exp(op) => BackwardOp::<T>::input_ids(op),
            GradFn::Ln(op) => BackwardOp::<T>::input_ids(op),
            GradFn::Tanh(op) => BackwardOp::<T>::input_ids(op),
        }
    }
}
