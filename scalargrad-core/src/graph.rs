// src/graph.rs
use crate::error::ScalarGradError;
use crate::node_data::{NodeData, NodeId};
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Arena holding every node of one computation graph.
///
/// Nodes are appended in creation order and only ever removed from the tail by
/// [`GraphData::truncate`], which refuses while a live [`Value`] still points into the
/// removed range. A [`NodeId`] held by a live handle therefore stays valid.
#[derive(Debug)]
pub(crate) struct GraphData<T: ScalarNumeric> {
    nodes: Vec<NodeData<T>>,
}

impl<T: ScalarNumeric> GraphData<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        GraphData {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, node: NodeData<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(
            node.parents.iter().all(|parent| parent.0 < id.0),
            "parents must exist before their children"
        );
        self.nodes.push(node);
        id
    }

    /// Drops every node from index `len` on.
    ///
    /// Parents always carry smaller ids than their children, so the remaining prefix is
    /// closed under parent links.
    pub(crate) fn truncate(&mut self, len: usize) -> Result<(), ScalarGradError> {
        if len >= self.nodes.len() {
            return Ok(());
        }
        if let Some(offset) = self.nodes[len..]
            .iter()
            .position(|node| node.handles.get() > 0)
        {
            return Err(ScalarGradError::LiveNodeBeyondCheckpoint {
                id: NodeId(len + offset),
                checkpoint: len,
            });
        }
        debug!("truncating graph from {} to {} nodes", self.nodes.len(), len);
        self.nodes.truncate(len);
        Ok(())
    }

    /// Registers a new handle to `id`.
    pub(crate) fn retain(&self, id: NodeId) {
        let handles = &self.nodes[id.0].handles;
        handles.set(handles.get() + 1);
    }

    /// Unregisters a handle to `id`.
    pub(crate) fn release(&self, id: NodeId) {
        if let Some(node) = self.nodes.get(id.0) {
            node.handles.set(node.handles.get().saturating_sub(1));
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut NodeData<T>> {
        self.nodes.iter_mut()
    }
}

impl<T: ScalarNumeric> std::ops::Index<NodeId> for GraphData<T> {
    type Output = NodeData<T>;

    fn index(&self, id: NodeId) -> &NodeData<T> {
        &self.nodes[id.0]
    }
}

impl<T: ScalarNumeric> std::ops::IndexMut<NodeId> for GraphData<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut NodeData<T> {
        &mut self.nodes[id.0]
    }
}

/// Shared handle to a computation graph.
///
/// `Graph` uses `Rc<RefCell<GraphData>>` internally:
/// 1.  **Shared Ownership:** every [`Value`] keeps the arena alive, so nodes stay
///     reachable for as long as any handle into the graph exists. Cloning a `Graph`
///     is cheap and yields another handle to the same arena.
/// 2.  **Interior Mutability:** operations append nodes and backward passes write
///     gradients through shared references.
///
/// Values from different graphs cannot be combined; see
/// [`ScalarGradError::GraphMismatch`].
pub struct Graph<T: ScalarNumeric = f64> {
    pub(crate) data: Rc<RefCell<GraphData<T>>>,
}

impl<T: ScalarNumeric> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            data: Rc::new(RefCell::new(GraphData::with_capacity(capacity))),
        }
    }

    /// Creates a leaf node holding `data`.
    pub fn value(&self, data: T) -> Value<T> {
        self.insert(NodeData::leaf(data, ""))
    }

    /// Creates a labelled leaf node holding `data`.
    pub fn value_with_label(&self, data: T, label: impl Into<String>) -> Value<T> {
        self.insert(NodeData::leaf(data, label))
    }

    /// Number of nodes created so far, leaves and intermediates alike.
    pub fn len(&self) -> usize {
        self.read_data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks the current end of the graph for a later [`truncate`](Self::truncate).
    ///
    /// Typical use is a training loop: create the parameters, take a checkpoint, then
    /// truncate back to it after each step so per-step nodes do not pile up.
    pub fn checkpoint(&self) -> usize {
        self.len()
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Does nothing if the graph holds no more than `checkpoint` nodes.
    ///
    /// # Errors
    /// [`ScalarGradError::LiveNodeBeyondCheckpoint`] if a [`Value`] handle to one of those
    /// nodes is still alive. The graph is left unchanged in that case.
    pub fn truncate(&self, checkpoint: usize) -> Result<(), ScalarGradError> {
        self.write_data().truncate(checkpoint)
    }

    /// Resets the gradient of every node in the graph to zero.
    ///
    /// Gradients accumulate across backward passes; call this (or
    /// [`Value::zero_grad`]) between independent passes.
    pub fn zero_grad(&self) {
        for node in self.write_data().nodes_mut() {
            node.grad = T::zero();
        }
    }

    /// Returns `true` if both handles point at the same arena.
    pub fn ptr_eq(&self, other: &Graph<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn insert(&self, node: NodeData<T>) -> Value<T> {
        let id = self.write_data().push(node);
        Value::from_id(self.clone(), id)
    }

    pub(crate) fn read_data(&self) -> Ref<'_, GraphData<T>> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, GraphData<T>> {
        self.data.borrow_mut()
    }
}

impl<T: ScalarNumeric> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Graph {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: ScalarNumeric> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScalarNumeric> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(f, "Graph(nodes={})", guard.len()),
            Err(_) => write!(f, "Graph(<borrowed>)"),
        }
    }
}
