use pathgrid_core::{NodeId, NodeState};

/// Minimal search interface: a dense node set with weighted edges.
pub trait Pather {
    /// Number of nodes. Valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append the outgoing edges of `id` into `buf` as `(neighbor, weight)`.
    /// The caller clears `buf` before calling. Weights must be > 0.
    fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>);
}

/// Pather with an admissible heuristic, required for A*.
pub trait AstarPather: Pather {
    /// Estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost.
    fn estimate(&self, from: NodeId, to: NodeId) -> f64;
}

/// Sink for the annotations a search leaves behind.
pub trait Annotator {
    fn state(&self, id: NodeId) -> NodeState;

    fn set_state(&mut self, id: NodeId, state: NodeState);
}
