//! Error taxonomy shared by every pathgrid crate.

use std::fmt;

use crate::geom::Coord;
use crate::node::{NodeId, NodeState};

/// Errors that can occur while building or editing a grid graph.
///
/// All variants are recoverable. A search that finds no path is not an
/// error; it is reported as `false` / `None` by the path finder.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height below 2, or a wall fraction outside `[0, 0.5]`.
    InvalidConfig {
        width: i32,
        height: i32,
        wall_fraction: f64,
    },
    /// A position outside the grid.
    OutOfBounds(Coord),
    /// No `Open` cell was found for a start or goal slot within the draw
    /// budget.
    NoOpenCell { state: NodeState, attempts: usize },
    /// The requested number of walls could not be placed within the retry
    /// budget.
    WallPlacementExhausted { placed: usize, requested: usize },
    /// Regeneration never produced a grid with a path.
    UnsolvableConfiguration { attempts: usize },
    /// An edge from a node to itself was requested.
    InvalidEdge(NodeId),
    /// A start or goal move targeted a wall or the other terminal.
    TargetBlocked { pos: Coord, state: NodeState },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                width,
                height,
                wall_fraction,
            } => write!(
                f,
                "invalid grid configuration: {width}x{height} with wall fraction {wall_fraction} \
                 (need width, height >= 2 and fraction in [0, 0.5])"
            ),
            Self::OutOfBounds(pos) => write!(f, "position {pos} is outside the grid"),
            Self::NoOpenCell { state, attempts } => {
                write!(f, "no open cell found for the {state} node after {attempts} draws")
            }
            Self::WallPlacementExhausted { placed, requested } => {
                write!(f, "placed only {placed} of {requested} walls before the retry budget ran out")
            }
            Self::UnsolvableConfiguration { attempts } => {
                write!(f, "no solvable grid generated in {attempts} attempts")
            }
            Self::InvalidEdge(id) => write!(f, "node {id} cannot hold an edge to itself"),
            Self::TargetBlocked { pos, state } => {
                write!(f, "cannot move onto {pos}: cell is {state}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_position() {
        let e = GridError::OutOfBounds(Coord::new(7, -1));
        assert_eq!(e.to_string(), "position (7, -1) is outside the grid");
    }

    #[test]
    fn display_target_blocked() {
        let e = GridError::TargetBlocked {
            pos: Coord::new(1, 1),
            state: NodeState::Wall,
        };
        assert_eq!(e.to_string(), "cannot move onto (1, 1): cell is wall");
    }
}
