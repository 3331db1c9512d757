use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;
use log::{debug, trace};

impl<T: ScalarNumeric> Value<T> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds `self.grad` with `1` (overwriting whatever it held), then visits every node
    /// reachable through parent links in reverse topological order and runs its local
    /// rule. A node's rule runs only after every consumer of that node has added its
    /// contribution, so each rule sees the node's final gradient.
    ///
    /// Gradients of all other nodes are **accumulated**, never reset: running backward
    /// twice, or from two different roots, adds to what earlier passes left behind. Call
    /// [`zero_grad`](Self::zero_grad) or [`Graph::zero_grad`](crate::Graph::zero_grad)
    /// between independent passes.
    ///
    /// On an isolated leaf this only sets the leaf's own gradient to `1`.
    pub fn backward(&self) {
        let mut graph = self.graph.write_data();
        let sorted_nodes = topological_sort(&graph, self.id);
        debug!(
            "backward from node {}: {} reachable of {} nodes",
            self.id,
            sorted_nodes.len(),
            graph.len()
        );

        graph[self.id].grad = T::one();

        for &node_id in sorted_nodes.iter().rev() {
            let (input_ids, input_grads, op_name) = {
                let node = &graph[node_id];
                match node.grad_fn.as_ref() {
                    Some(grad_fn) => (
                        grad_fn.input_ids(),
                        grad_fn.backward(node, &graph),
                        grad_fn.name(),
                    ),
                    None => continue,
                }
            };
            debug_assert_eq!(
                input_grads.len(),
                input_ids.len(),
                "{} returned the wrong number of gradients",
                op_name
            );

            trace!("[backward] {} {} -> {:?}", op_name, node_id, input_ids);
            for (input_id, grad_to_add) in input_ids.into_iter().zip(input_grads) {
                graph[input_id].grad += grad_to_add;
            }
        }
    }

    /// Resets the gradient of this node and of every node reachable from it to zero.
    ///
    /// Nodes outside this node's subgraph keep their gradients.
    pub fn zero_grad(&self) {
        let mut graph = self.graph.write_data();
        for node_id in topological_sort(&graph, self.id) {
            graph[node_id].grad = T::zero();
        }
    }

    /// Returns every node reachable from this one, parents before children, ending with
    /// `self`. This is the order [`backward`](Self::backward) consumes in reverse.
    pub fn topological_order(&self) -> Vec<Value<T>> {
        let sorted_nodes = topological_sort(&self.graph.read_data(), self.id);
        sorted_nodes
            .into_iter()
            .map(|id| Value::from_id(self.graph.clone(), id))
            .collect()
    }
}
