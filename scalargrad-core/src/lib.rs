//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every arithmetic operation on a [`Value`] appends a node to its [`Graph`] and records a
//! local gradient rule. Calling [`Value::backward`] on an output walks the reachable nodes
//! in reverse topological order and accumulates `d(output)/d(node)` into each node's `grad`.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph: Graph = Graph::new();
//! let a = graph.value(-4.0);
//! let b = graph.value(2.0);
//! let d = &a * &b + b.pow(3.0);
//! d.backward();
//! assert_eq!(a.grad(), 2.0);
//! assert_eq!(b.grad(), 8.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node_data;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node_data::NodeId;
pub use ops::traits::ScalarNumeric;
pub use ops::Operand;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
