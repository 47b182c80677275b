//! [`GridController`]: regeneration until solvable, terminal moves and
//! wall-density changes.

use pathgrid_core::{Coord, GridError, NodeObserver};
use pathgrid_paths::{Path, PathFinder};
use rand::Rng;

use crate::config::ControllerConfig;
use crate::graph::{GridGraph, Terminal};

/// Owns a [`GridGraph`], a [`PathFinder`] and the random source used to
/// build grids.
pub struct GridController<R: Rng> {
    config: ControllerConfig,
    graph: GridGraph,
    finder: PathFinder,
    rng: R,
    last_path: Option<Path>,
}

impl<R: Rng> GridController<R> {
    /// Create a controller with an empty, unbuilt grid.
    ///
    /// Call [`regenerate`](Self::regenerate) to obtain a solvable grid.
    pub fn new(config: ControllerConfig, rng: R) -> Result<Self, GridError> {
        let graph = GridGraph::new(config.grid)?;
        Ok(Self {
            config,
            graph,
            finder: PathFinder::new(),
            rng,
            last_path: None,
        })
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// Settings used by the next regeneration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Path found by the most recent search.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }

    pub fn last_path_found(&self) -> bool {
        self.last_path.is_some()
    }

    /// Install the observer that receives every state write of the grid.
    pub fn set_observer(&mut self, observer: Box<dyn NodeObserver>) {
        self.graph.set_observer(observer);
    }

    /// Regenerate with the configured corner terminals.
    pub fn regenerate(&mut self) -> Result<usize, GridError> {
        let grid = self.config.grid;
        self.regenerate_until_solvable(grid.default_start(), grid.default_goal())
    }

    /// Build grids until one has a path from start to goal.
    ///
    /// Each attempt rebuilds the grid, places the terminals, scatters walls,
    /// connects everything and searches. Placement and wall failures only
    /// cost the attempt; invalid settings and out-of-bounds terminals abort
    /// at once. Returns the number of attempts used.
    pub fn regenerate_until_solvable(
        &mut self,
        start: Coord,
        goal: Coord,
    ) -> Result<usize, GridError> {
        self.config.grid.validate()?;
        self.last_path = None;
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            self.graph.rebuild(self.config.grid)?;
            if let Err(err) = self.build(start, goal) {
                if aborts_regeneration(&err) {
                    return Err(err);
                }
                log::debug!("attempt {attempt}: {err}");
                continue;
            }
            if self.search() {
                log::debug!("solvable grid after {attempt} attempt(s)");
                return Ok(attempt);
            }
            log::debug!("attempt {attempt}: no path");
        }

        log::warn!("no solvable grid in {max_attempts} attempts");
        Err(GridError::UnsolvableConfiguration {
            attempts: max_attempts,
        })
    }

    fn build(&mut self, start: Coord, goal: Coord) -> Result<(), GridError> {
        self.graph.place_start_and_goal(start, goal, &mut self.rng)?;
        self.graph.scatter_walls(&mut self.rng)?;
        self.graph.connect_all()
    }

    /// Move a terminal and search again. Returns whether a path exists.
    ///
    /// A move onto the terminal's own cell changes nothing and reports the
    /// previous result without searching.
    pub fn request_move(&mut self, which: Terminal, pos: Coord) -> Result<bool, GridError> {
        let before = self.graph.terminal_id(which);
        self.graph.move_terminal(which, pos)?;
        if before.is_some() && self.graph.terminal_id(which) == before {
            return Ok(self.last_path_found());
        }
        Ok(self.search())
    }

    /// Step a terminal by `(dx, dz)`.
    ///
    /// A step that would leave the grid keeps the current position. Does
    /// nothing and returns `false` when the terminal is not placed.
    pub fn nudge(&mut self, which: Terminal, dx: i32, dz: i32) -> Result<bool, GridError> {
        let Some(id) = self.graph.terminal_id(which) else {
            return Ok(false);
        };
        let from = self.graph.node(id).coord();
        let to = from.shift(dx, dz);
        let target = if self.graph.bounds().contains(to) { to } else { from };
        self.request_move(which, target)
    }

    /// Store a new wall fraction for the next regeneration.
    ///
    /// The current grid is left as is.
    pub fn set_wall_fraction(&mut self, fraction: f64) -> Result<(), GridError> {
        let mut grid = self.config.grid;
        grid.wall_fraction = fraction;
        grid.validate()?;
        self.config.grid = grid;
        log::debug!("wall fraction set to {fraction}");
        Ok(())
    }

    /// Clear annotations and search the current grid again.
    pub fn refresh(&mut self) -> bool {
        self.graph.clear_annotations();
        self.search()
    }

    fn search(&mut self) -> bool {
        let (Some(start), Some(goal)) = (self.graph.start_id(), self.graph.goal_id()) else {
            self.last_path = None;
            return false;
        };
        self.last_path = self.finder.search(&mut self.graph, start, goal);
        self.last_path.is_some()
    }
}

/// Whether an error inside one attempt ends regeneration instead of
/// costing only that attempt.
fn aborts_regeneration(err: &GridError) -> bool {
    matches!(
        err,
        GridError::InvalidConfig { .. } | GridError::OutOfBounds(_)
    )
}
