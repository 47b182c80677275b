use pathgrid_core::NodeId;

/// Cost value meaning "unreachable" in Dijkstra cost maps.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Sentinel parent index for nodes without a predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A path found by A*: the node sequence from start to goal and its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) cost: f64,
}

impl Path {
    /// Nodes from start to goal, both included.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of edge weights along the path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes, endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes strictly between start and goal.
    pub fn interior(&self) -> &[NodeId] {
        if self.nodes.len() <= 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }
}

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
///
/// Pops the smallest `f` first; equal `f` pops the smallest index first,
/// which is row-major order on a grid.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, idx) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Runs searches over any [`Pather`](crate::Pather).
///
/// `PathFinder` keeps its node arrays between calls to avoid reallocating,
/// but every search starts from a fresh generation: no g-score, f-score,
/// predecessor or closed flag survives from one call to the next.
#[derive(Default)]
pub struct PathFinder {
    pub(crate) astar_nodes: Vec<SearchNode>,
    pub(crate) astar_generation: u32,
    pub(crate) dijkstra_nodes: Vec<SearchNode>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) bfs_seen: Vec<bool>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<(NodeId, f64)>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Grow the caches to hold `len` nodes. Never shrinks.
    pub(crate) fn reserve_nodes(&mut self, len: usize) {
        if self.astar_nodes.len() < len {
            self.astar_nodes.resize(len, SearchNode::default());
        }
        if self.dijkstra_nodes.len() < len {
            self.dijkstra_nodes.resize(len, SearchNode::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 7, f: 2.0 });
        heap.push(NodeRef { idx: 3, f: 2.0 });
        heap.push(NodeRef { idx: 9, f: 1.5 });
        heap.push(NodeRef { idx: 1, f: 4.0 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![9, 3, 7, 1]);
    }

    #[test]
    fn interior_excludes_endpoints() {
        let p = Path {
            nodes: vec![NodeId(0), NodeId(4), NodeId(8)],
            cost: 2.0,
        };
        assert_eq!(p.interior(), &[NodeId(4)]);
        let short = Path {
            nodes: vec![NodeId(0), NodeId(3)],
            cost: 1.0,
        };
        assert!(short.interior().is_empty());
    }

    #[test]
    fn reserve_grows_only() {
        let mut pf = PathFinder::new();
        pf.reserve_nodes(25);
        assert_eq!(pf.astar_nodes.len(), 25);
        pf.reserve_nodes(4);
        assert_eq!(pf.astar_nodes.len(), 25);
        assert_eq!(pf.dijkstra_nodes.len(), 25);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            nodes: vec![NodeId(0), NodeId(5)],
            cost: 1.5,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
