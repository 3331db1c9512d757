// src/node_data.rs
use crate::autograd::backward_op::{BackwardOp, GradFn};
use crate::ops::traits::ScalarNumeric;
use std::cell::Cell;
use std::fmt;

/// Stable identity of a node inside its [`Graph`](crate::Graph).
///
/// Ids are arena indices handed out in creation order, so a node's parents always carry
/// smaller ids than the node itself. Two nodes holding equal `data` still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage and autograd metadata for one scalar node.
///
/// Owned by the arena in [`GraphData`](crate::graph::GraphData); user code reaches it
/// through a [`Value`](crate::Value) handle.
#[derive(Debug, Clone)]
pub(crate) struct NodeData<T: ScalarNumeric> {
    /// Forward value, computed eagerly when the node is created.
    pub(crate) data: T,
    /// `d(root)/d(self)` accumulated by backward passes. Starts at zero.
    pub(crate) grad: T,
    /// Operand nodes, deduplicated by identity: `x + x` has the single parent `x`.
    pub(crate) parents: Vec<NodeId>,
    /// Local gradient rule. Leaves have none.
    pub(crate) grad_fn: Option<GradFn<T>>,
    /// Free-form name for debugging output.
    pub(crate) label: String,
    /// Number of live [`Value`](crate::Value) handles pointing at this node.
    pub(crate) handles: Cell<usize>,
}

impl<T: ScalarNumeric> NodeData<T> {
    /// Creates a node with `grad = 0`; parents are taken from the rule's inputs.
    pub(crate) fn new(data: T, grad_fn: Option<GradFn<T>>, label: impl Into<String>) -> Self {
        let parents = grad_fn
            .as_ref()
            .map(|op| unique_parents(op.input_ids()))
            .unwrap_or_default();
        NodeData {
            data,
            grad: T::zero(),
            parents,
            grad_fn,
            label: label.into(),
            handles: Cell::new(0),
        }
    }

    /// Creates a parent-less node holding a user-supplied constant or input.
    pub(crate) fn leaf(data: T, label: impl Into<String>) -> Self {
        Self::new(data, None, label)
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }

    /// Symbol of the operation that produced this node; empty for leaves.
    pub(crate) fn op_tag(&self) -> &'static str {
        self.grad_fn.as_ref().map_or("", GradFn::tag)
    }
}

/// Keeps the first occurrence of every id, in operand order.
fn unique_parents(inputs: Vec<NodeId>) -> Vec<NodeId> {
    let mut parents = Vec::with_capacity(inputs.len());
    for id in inputs {
        if !parents.contains(&id) {
            parents.push(id);
        }
    }
    parents
}
