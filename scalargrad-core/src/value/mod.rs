// src/value/mod.rs

use crate::graph::Graph;
use crate::node_data::NodeId;
use crate::ops::traits::ScalarNumeric;
use log::warn;

mod autograd_methods;
mod debug;
mod operators;

/// Handle to one scalar node of a computation graph.
///
/// A `Value` is a graph handle plus a [`NodeId`]. Cloning it is cheap and yields another
/// handle to the *same* node; it never copies the node. Operations on values
/// (`&a + &b`, `a.relu()`, ...) append new nodes to the shared [`Graph`].
///
/// Leaves are created through [`Graph::value`]; everything else is the result of an
/// operation.
///
/// Each node counts its live handles. A node stays in the graph while any handle to it
/// exists; once none do, [`Graph::truncate`] can reclaim it.
pub struct Value<T: ScalarNumeric = f64> {
    pub(crate) graph: Graph<T>,
    pub(crate) id: NodeId,
}

impl<T: ScalarNumeric> Value<T> {
    /// Creates a counted handle to `id`.
    pub(crate) fn from_id(graph: Graph<T>, id: NodeId) -> Self {
        graph.read_data().retain(id);
        Value { graph, id }
    }

    /// Forward value of the node.
    pub fn data(&self) -> T {
        self.graph.read_data()[self.id].data
    }

    /// Gradient accumulated by backward passes; zero until one has reached this node.
    pub fn grad(&self) -> T {
        self.graph.read_data()[self.id].grad
    }

    /// Overwrites the forward value, e.g. for a parameter update step.
    ///
    /// Nodes already computed from this one keep their old `data`; rebuild the
    /// expression to see the new value flow through.
    pub fn set_data(&self, data: T) {
        let mut graph = self.graph.write_data();
        let node = &mut graph[self.id];
        if !node.is_leaf() {
            warn!(
                "set_data on non-leaf node {} ({}): downstream values and local gradients will disagree",
                self.id,
                node.op_tag()
            );
        }
        node.data = data;
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Graph this node belongs to.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn label(&self) -> String {
        self.graph.read_data()[self.id].label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.write_data()[self.id].label = label.into();
    }

    /// Builder-style variant of [`set_label`](Self::set_label).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Symbol of the operation that produced this node (`"+"`, `"*"`, `"**"`, `"ReLU"`,
    /// ...); empty for leaves.
    pub fn op_tag(&self) -> &'static str {
        self.graph.read_data()[self.id].op_tag()
    }

    /// Direct operands of this node, deduplicated by identity.
    pub fn parents(&self) -> Vec<Value<T>> {
        self.graph.read_data()[self.id]
            .parents
            .iter()
            .map(|&id| Value::from_id(self.graph.clone(), id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.read_data()[self.id].is_leaf()
    }

    /// Returns `true` if both handles refer to the same node (identity, not value).
    pub fn ptr_eq(&self, other: &Value<T>) -> bool {
        self.id == other.id && self.graph.ptr_eq(&other.graph)
    }
}

impl<T: ScalarNumeric> Clone for Value<T> {
    fn clone(&self) -> Self {
        Value::from_id(self.graph.clone(), self.id)
    }
}

impl<T: ScalarNumeric> Drop for Value<T> {
    fn drop(&mut self) {
        // A handle dropped while the graph is mutably borrowed stays counted; truncation
        // is then refused rather than unsound.
        if let Ok(graph) = self.graph.data.try_borrow() {
            graph.release(self.id);
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
