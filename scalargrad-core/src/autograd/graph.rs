use crate::graph::GraphData;
use crate::node_data::NodeId;
use crate::ops::traits::ScalarNumeric;
use log::trace;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root` through parent links.
///
/// Depth-first post-order: a node is appended only after all of its parents, so parents
/// come earlier in the returned list and `root` comes last. Iterating the result in
/// reverse therefore visits every consumer of a node before the node itself.
///
/// Nodes are visited at most once, keyed by [`NodeId`] (identity, not value). The walk
/// uses an explicit stack so long chains do not exhaust the call stack.
pub(crate) fn topological_sort<T: ScalarNumeric>(
    graph: &GraphData<T>,
    root: NodeId,
) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, parents_done)
    let mut stack = vec![(root, false)];

    while let Some((node_id, parents_done)) = stack.pop() {
        if parents_done {
            trace!("[topological_sort] append {}", node_id);
            sorted.push(node_id);
            continue;
        }
        if !visited.insert(node_id) {
            continue;
        }
        stack.push((node_id, true));
        // Reversed so the first operand is explored first, matching a recursive walk.
        for &parent in graph[node_id].parents.iter().rev() {
            if !visited.contains(&parent) {
                stack.push((parent, false));
            }
        }
    }

    sorted
}
