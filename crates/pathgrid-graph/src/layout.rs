//! Building a [`GridGraph`] from an ASCII layout.
//!
//! One glyph per cell, one line per row:
//!
//! ```text
//! S..
//! .#.
//! ..G
//! ```
//!
//! `S` start, `G` goal, `.` open, `#` wall. The annotation glyphs `x`
//! (explored) and `*` (chosen) are accepted too, so a rendered grid parses
//! back into the same picture. Surrounding whitespace of the whole text and
//! of each line is ignored.

use std::fmt;

use pathgrid_core::{Bounds, Coord, GridError, NodeId, NodeState};

use crate::config::{GridConfig, MAX_WALL_FRACTION, MIN_SIDE};
use crate::graph::GridGraph;

/// Error type for [`GridGraph::from_layout`].
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A line is wider or narrower than the first one.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// A character outside the glyph alphabet.
    InvalidGlyph { ch: char, pos: Coord },
    /// Fewer than two rows or columns.
    TooSmall { width: usize, height: usize },
    /// No `S` or no `G`.
    MissingTerminal(NodeState),
    /// A second `S` or `G`.
    DuplicateTerminal { state: NodeState, pos: Coord },
    /// The graph could not be assembled.
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooSmall { width, height } => {
                write!(f, "layout is {width}x{height}, need at least {MIN_SIDE}x{MIN_SIDE}")
            }
            Self::MissingTerminal(state) => write!(f, "layout has no {state} cell"),
            Self::DuplicateTerminal { state, pos } => {
                write!(f, "layout has a second {state} cell at {pos}")
            }
            Self::Grid(err) => write!(f, "layout: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl GridGraph {
    /// Parse `text` into a fully connected graph.
    ///
    /// The configuration's wall fraction is the share of `#` cells, capped
    /// at the largest valid fraction.
    pub fn from_layout(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        for (line, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
        }
        let height = rows.len();
        let too_small = LayoutError::TooSmall { width, height };
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(too_small);
        };
        if w < MIN_SIDE || h < MIN_SIDE {
            return Err(too_small);
        }

        let bounds = Bounds::new(w, h);
        let mut states = Vec::with_capacity(bounds.len());
        let mut start = None;
        let mut goal = None;
        for (z, row) in (0..h).zip(&rows) {
            for (x, ch) in (0..w).zip(row.chars()) {
                let pos = Coord::new(x, z);
                let state =
                    NodeState::from_glyph(ch).ok_or(LayoutError::InvalidGlyph { ch, pos })?;
                let slot = match state {
                    NodeState::Start => Some(&mut start),
                    NodeState::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.is_some() {
                        return Err(LayoutError::DuplicateTerminal { state, pos });
                    }
                    *slot = Some(NodeId(states.len()));
                }
                states.push(state);
            }
        }
        let start = start.ok_or(LayoutError::MissingTerminal(NodeState::Start))?;
        let goal = goal.ok_or(LayoutError::MissingTerminal(NodeState::Goal))?;

        let walls = states.iter().filter(|&&s| s == NodeState::Wall).count();
        let fraction = (walls as f64 / states.len() as f64).min(MAX_WALL_FRACTION);
        let mut graph = GridGraph::new(GridConfig::new(w, h, fraction))?;
        for (node, state) in graph.nodes.iter_mut().zip(states) {
            node.set_state(state);
        }
        graph.start = Some(start);
        graph.goal = Some(goal);
        graph.connect_all()?;
        log::debug!("parsed {} layout with {walls} walls", graph.bounds());
        Ok(graph)
    }
}
