use crate::node_data::NodeId;
use thiserror::Error;

/// Error type for structural misuse of the computation graph.
///
/// Numeric domain problems (division by zero, `ln` of a negative number, fractional
/// powers of negative bases) are not errors: they surface as `inf`/`NaN` in `data`
/// exactly as the floating-point type produces them.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Graph mismatch: operands of '{operation}' belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Cannot truncate graph to {checkpoint} nodes: node {id} is still referenced by a live Value")]
    LiveNodeBeyondCheckpoint { id: NodeId, checkpoint: usize },
}
