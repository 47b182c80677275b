//! The [`GridGraph`]: a dense grid of [`Node`]s with Moore-neighbourhood
//! edges, a start and a goal.
//!
//! Construction, wall scattering, connectivity and relocation live in
//! sibling modules as further `impl GridGraph` blocks.

use std::fmt;

use pathgrid_core::{Bounds, Coord, GridError, Node, NodeId, NodeObserver, NodeState};
use pathgrid_paths::{Annotator, AstarPather, Pather, euclidean};

use crate::config::GridConfig;

/// Which of the two distinguished nodes an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminal {
    Start,
    Goal,
}

impl Terminal {
    /// The node state that marks this terminal.
    pub fn state(self) -> NodeState {
        match self {
            Self::Start => NodeState::Start,
            Self::Goal => NodeState::Goal,
        }
    }

    /// The other terminal.
    pub fn other(self) -> Self {
        match self {
            Self::Start => Self::Goal,
            Self::Goal => Self::Start,
        }
    }
}

/// A weighted 8-connected grid graph.
///
/// Every non-wall node holds one directed edge per in-bounds non-wall Moore
/// neighbour, weighted by the Euclidean distance between the two cells.
/// Walls hold no edges and nothing points at them.
pub struct GridGraph {
    pub(crate) config: GridConfig,
    pub(crate) bounds: Bounds,
    pub(crate) nodes: Vec<Node>,
    pub(crate) start: Option<NodeId>,
    pub(crate) goal: Option<NodeId>,
    observer: Option<Box<dyn NodeObserver>>,
}

impl GridGraph {
    /// Allocate a `width × height` grid of `Open` nodes without edges.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let bounds = Bounds::new(config.width, config.height);
        Ok(Self {
            config,
            bounds,
            nodes: Self::allocate(bounds),
            start: None,
            goal: None,
            observer: None,
        })
    }

    /// Replace the whole grid with a fresh one for `config`.
    ///
    /// The observer is kept and told that every cell is now `Open`.
    pub fn rebuild(&mut self, config: GridConfig) -> Result<(), GridError> {
        config.validate()?;
        self.config = config;
        self.bounds = Bounds::new(config.width, config.height);
        self.nodes = Self::allocate(self.bounds);
        self.start = None;
        self.goal = None;
        if let Some(obs) = self.observer.as_mut() {
            for c in self.bounds.iter() {
                obs.on_node_state_changed(c, NodeState::Open);
            }
        }
        Ok(())
    }

    fn allocate(bounds: Bounds) -> Vec<Node> {
        bounds
            .iter()
            .enumerate()
            .map(|(i, c)| Node::new(NodeId(i), c))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Observer
    // -----------------------------------------------------------------------

    /// Install the observer notified on every state write.
    pub fn set_observer(&mut self, observer: Box<dyn NodeObserver>) {
        self.observer = Some(observer);
    }

    /// Builder-style variant of [`set_observer`](Self::set_observer).
    pub fn with_observer(mut self, observer: impl NodeObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Write a node's state and notify the observer.
    pub(crate) fn write_state(&mut self, id: NodeId, state: NodeState) {
        let node = &mut self.nodes[id.index()];
        node.set_state(state);
        let coord = node.coord();
        if let Some(obs) = self.observer.as_mut() {
            obs.on_node_state_changed(coord, state);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Configuration the grid was last built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn id_of(&self, c: Coord) -> Option<NodeId> {
        self.bounds.index(c).map(NodeId)
    }

    /// Like [`id_of`](Self::id_of), failing with `OutOfBounds`.
    pub fn require_id(&self, c: Coord) -> Result<NodeId, GridError> {
        self.id_of(c).ok_or(GridError::OutOfBounds(c))
    }

    /// The node with the given id. Panics if the id is not from this grid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_at(&self, c: Coord) -> Option<&Node> {
        self.id_of(c).map(|id| self.node(id))
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// State of the cell at `c`.
    pub fn state_at(&self, c: Coord) -> Result<NodeState, GridError> {
        Ok(self.node(self.require_id(c)?).state())
    }

    /// Edges of the cell at `c` as `(neighbour coordinate, weight)`.
    pub fn edges_at(&self, c: Coord) -> Result<Vec<(Coord, f64)>, GridError> {
        let node = self.node(self.require_id(c)?);
        Ok(node
            .edges()
            .map(|(id, w)| (self.node(id).coord(), w))
            .collect())
    }

    /// Id of the given terminal, if placed.
    pub fn terminal_id(&self, which: Terminal) -> Option<NodeId> {
        match which {
            Terminal::Start => self.start,
            Terminal::Goal => self.goal,
        }
    }

    pub fn start_id(&self) -> Option<NodeId> {
        self.start
    }

    pub fn goal_id(&self) -> Option<NodeId> {
        self.goal
    }

    /// Position of the start node, if placed.
    pub fn start(&self) -> Option<Coord> {
        self.start.map(|id| self.node(id).coord())
    }

    /// Position of the goal node, if placed.
    pub fn goal(&self) -> Option<Coord> {
        self.goal.map(|id| self.node(id).coord())
    }

    /// Number of nodes in `state`.
    pub fn count(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state() == state).count()
    }

    // -----------------------------------------------------------------------
    // Annotations
    // -----------------------------------------------------------------------

    /// Reset every `Explored` or `Chosen` node to `Open`.
    ///
    /// Structural states are left alone. Returns the number of nodes reset.
    pub fn clear_annotations(&mut self) -> usize {
        let mut cleared = 0;
        for i in 0..self.nodes.len() {
            if self.nodes[i].state().is_annotation() {
                self.write_state(NodeId(i), NodeState::Open);
                cleared += 1;
            }
        }
        cleared
    }
}

impl fmt::Debug for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridGraph")
            .field("config", &self.config)
            .field("start", &self.start())
            .field("goal", &self.goal())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Renders one glyph per cell, rows separated by newlines.
impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.height() {
            if z > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let state = self.node_at(Coord::new(x, z)).map_or(NodeState::Open, Node::state);
                write!(f, "{}", state.glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Search seams
// ---------------------------------------------------------------------------

impl Pather for GridGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>) {
        if let Some(node) = self.nodes.get(id.index()) {
            buf.extend(node.edges());
        }
    }
}

impl AstarPather for GridGraph {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        euclidean(self.node(from).coord(), self.node(to).coord())
    }
}

impl Annotator for GridGraph {
    fn state(&self, id: NodeId) -> NodeState {
        self.node(id).state()
    }

    fn set_state(&mut self, id: NodeId, state: NodeState) {
        self.write_state(id, state);
    }
}
