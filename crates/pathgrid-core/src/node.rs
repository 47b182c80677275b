//! Graph vertices: [`NodeId`], [`NodeState`] and [`Node`].

use std::collections::BTreeMap;
use std::fmt;

use crate::error::GridError;
use crate::geom::Coord;

/// Dense row-major index of a node inside its grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visualization state of a cell.
///
/// `Start`, `Goal`, `Open` and `Wall` are structural. `Explored` and
/// `Chosen` are annotations left behind by the most recent search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    Start,
    Goal,
    #[default]
    Open,
    Wall,
    Explored,
    Chosen,
}

impl NodeState {
    /// All states, in declaration order.
    pub const ALL: [NodeState; 6] = [
        Self::Start,
        Self::Goal,
        Self::Open,
        Self::Wall,
        Self::Explored,
        Self::Chosen,
    ];

    /// Whether this is a search annotation (`Explored` or `Chosen`).
    #[inline]
    pub fn is_annotation(self) -> bool {
        matches!(self, Self::Explored | Self::Chosen)
    }

    /// Whether this is one of the two path terminals.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }

    /// Whether a cell in this state can carry edges.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != Self::Wall
    }

    /// Single-character glyph used by layouts and text renderers.
    pub fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Open => '.',
            Self::Wall => '#',
            Self::Explored => 'x',
            Self::Chosen => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == ch)
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Goal => "goal",
            Self::Open => "open",
            Self::Wall => "wall",
            Self::Explored => "explored",
            Self::Chosen => "chosen",
        };
        f.write_str(name)
    }
}

/// A single grid vertex with its outgoing weighted edges.
///
/// Edges are stored per node as directed entries; the graph keeps the
/// reciprocal entry on the neighbour in sync. The map is ordered by
/// [`NodeId`], so edge iteration is row-major.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    coord: Coord,
    state: NodeState,
    edges: BTreeMap<NodeId, f64>,
}

impl Node {
    /// Create an `Open` node without edges.
    pub fn new(id: NodeId, coord: Coord) -> Self {
        Self {
            id,
            coord,
            state: NodeState::Open,
            edges: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Replace the state, returning the previous one.
    ///
    /// Observers are notified by the owning graph, not here.
    pub fn set_state(&mut self, state: NodeState) -> NodeState {
        std::mem::replace(&mut self.state, state)
    }

    /// Insert or overwrite the edge to `other`.
    pub fn add_edge(&mut self, other: NodeId, weight: f64) -> Result<(), GridError> {
        if other == self.id {
            return Err(GridError::InvalidEdge(self.id));
        }
        self.edges.insert(other, weight);
        Ok(())
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Weight of the edge to `other`, if any.
    #[inline]
    pub fn weight(&self, other: NodeId) -> Option<f64> {
        self.edges.get(&other).copied()
    }

    /// Outgoing edges in row-major neighbour order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.edges.iter().map(|(&id, &w)| (id, w))
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
