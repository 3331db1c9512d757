//! Backward machinery: local gradient rules, graph ordering, and gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub(crate) use backward_op::{BackwardOp, GradFn};
