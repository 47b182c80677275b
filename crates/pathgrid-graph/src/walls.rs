//! Random placement: start/goal slots and wall scattering.
//!
//! Every random draw is bounded. Start and goal get at most one draw per
//! cell of the grid; each wall slot gets [`DRAWS_PER_WALL`] draws.

use pathgrid_core::{Coord, GridError, NodeId, NodeState};
use rand::{Rng, RngExt};

use crate::graph::{GridGraph, Terminal};

/// Draw budget for each wall slot.
pub const DRAWS_PER_WALL: usize = 64;

impl GridGraph {
    /// Place the start and goal nodes.
    ///
    /// With `randomize_start_and_goal` set, both positions are drawn
    /// uniformly and the arguments are ignored. Otherwise the given cell is
    /// used when it is `Open`, and uniform draws replace it when it is not
    /// (for example when `goal == start`). Previously placed terminals are
    /// reverted to `Open` first.
    pub fn place_start_and_goal(
        &mut self,
        start: Coord,
        goal: Coord,
        rng: &mut impl Rng,
    ) -> Result<(), GridError> {
        if !self.config.randomize_start_and_goal {
            for c in [start, goal] {
                if !self.bounds.contains(c) {
                    return Err(GridError::OutOfBounds(c));
                }
            }
        }
        // Terminals and open cells are both passable, so edges stay valid.
        for id in [self.start.take(), self.goal.take()].into_iter().flatten() {
            self.write_state(id, NodeState::Open);
        }

        let start_id = self.place_slot(Terminal::Start, start, rng)?;
        self.start = Some(start_id);
        let goal_id = self.place_slot(Terminal::Goal, goal, rng)?;
        self.goal = Some(goal_id);
        Ok(())
    }

    fn place_slot(
        &mut self,
        which: Terminal,
        preferred: Coord,
        rng: &mut impl Rng,
    ) -> Result<NodeId, GridError> {
        let state = which.state();
        if !self.config.randomize_start_and_goal {
            let id = self.require_id(preferred)?;
            if self.node(id).state() == NodeState::Open {
                self.write_state(id, state);
                return Ok(id);
            }
            log::debug!("{state} position {preferred} is taken, drawing a random cell");
        }

        let attempts = self.len();
        for _ in 0..attempts {
            let c = self.random_coord(rng);
            let Some(id) = self.id_of(c) else {
                continue;
            };
            if self.node(id).state() == NodeState::Open {
                self.write_state(id, state);
                return Ok(id);
            }
        }
        log::warn!("no open cell for the {state} node after {attempts} draws");
        Err(GridError::NoOpenCell { state, attempts })
    }

    /// Turn `floor(wall_fraction * width * height)` random `Open` cells into
    /// walls.
    ///
    /// A draw that lands on a non-`Open` cell (start, goal or an earlier
    /// wall) is retried for the same slot. Edges are not touched; run
    /// [`connect_all`](Self::connect_all) afterwards. Returns the number of
    /// walls placed.
    pub fn scatter_walls(&mut self, rng: &mut impl Rng) -> Result<usize, GridError> {
        let requested = self.config.wall_count();
        let budget = requested * DRAWS_PER_WALL;
        let mut placed = 0usize;
        let mut draws = 0usize;

        while placed < requested && draws < budget {
            draws += 1;
            let c = self.random_coord(rng);
            let Some(id) = self.id_of(c) else {
                continue;
            };
            if self.node(id).state() != NodeState::Open {
                continue;
            }
            self.write_state(id, NodeState::Wall);
            placed += 1;
        }

        if placed < requested {
            log::warn!("wall placement stopped at {placed}/{requested} after {draws} draws");
            return Err(GridError::WallPlacementExhausted { placed, requested });
        }
        log::debug!("placed {placed} walls in {draws} draws");
        Ok(placed)
    }

    fn random_coord(&self, rng: &mut impl Rng) -> Coord {
        Coord::new(
            rng.random_range(0..self.width()),
            rng.random_range(0..self.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(w: i32, h: i32, fraction: f64) -> GridGraph {
        GridGraph::new(GridConfig::new(w, h, fraction)).unwrap()
    }

    #[test]
    fn places_fixed_terminals() {
        let mut g = grid(4, 4, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        g.place_start_and_goal(Coord::new(0, 0), Coord::new(3, 3), &mut rng)
            .unwrap();
        assert_eq!(g.start(), Some(Coord::new(0, 0)));
        assert_eq!(g.goal(), Some(Coord::new(3, 3)));
        assert_eq!(g.count(NodeState::Start), 1);
        assert_eq!(g.count(NodeState::Goal), 1);
    }

    #[test]
    fn coinciding_goal_is_redrawn() {
        let mut g = grid(3, 3, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        g.place_start_and_goal(Coord::new(1, 1), Coord::new(1, 1), &mut rng)
            .unwrap();
        assert_eq!(g.start(), Some(Coord::new(1, 1)));
        assert_ne!(g.goal(), g.start());
        assert_eq!(g.count(NodeState::Goal), 1);
    }

    #[test]
    fn out_of_bounds_terminal() {
        let mut g = grid(3, 3, 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        let far = Coord::new(3, 0);
        assert_eq!(
            g.place_start_and_goal(Coord::ZERO, far, &mut rng),
            Err(GridError::OutOfBounds(far))
        );
    }

    #[test]
    fn randomized_terminals_are_distinct() {
        let mut cfg = GridConfig::new(5, 5, 0.0);
        cfg.randomize_start_and_goal = true;
        let mut g = GridGraph::new(cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            g.place_start_and_goal(Coord::ZERO, Coord::ZERO, &mut rng)
                .unwrap();
            assert_eq!(g.count(NodeState::Start), 1);
            assert_eq!(g.count(NodeState::Goal), 1);
            assert_ne!(g.start(), g.goal());
        }
    }

    #[test]
    fn no_open_cell_is_an_error() {
        let mut g = grid(2, 2, 0.0);
        for i in 1..4 {
            g.write_state(NodeId(i), NodeState::Wall);
        }
        let mut rng = StdRng::seed_from_u64(3);
        let err = g
            .place_start_and_goal(Coord::ZERO, Coord::new(1, 1), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GridError::NoOpenCell {
                state: NodeState::Goal,
                attempts: 4
            }
        );
    }

    #[test]
    fn scatter_places_exact_count_and_spares_terminals() {
        for seed in 0..10 {
            let mut g = grid(10, 8, 0.5);
            let mut rng = StdRng::seed_from_u64(seed);
            g.place_start_and_goal(Coord::ZERO, Coord::new(9, 7), &mut rng)
                .unwrap();
            let placed = g.scatter_walls(&mut rng).unwrap();
            assert_eq!(placed, 40);
            assert_eq!(g.count(NodeState::Wall), 40);
            assert_eq!(g.state_at(Coord::ZERO), Ok(NodeState::Start));
            assert_eq!(g.state_at(Coord::new(9, 7)), Ok(NodeState::Goal));
        }
    }

    #[test]
    fn scatter_on_tiny_grid_fills_every_free_cell() {
        let mut g = grid(2, 2, 0.5);
        let mut rng = StdRng::seed_from_u64(5);
        g.place_start_and_goal(Coord::ZERO, Coord::new(1, 1), &mut rng)
            .unwrap();
        assert_eq!(g.scatter_walls(&mut rng), Ok(2));
        assert_eq!(g.to_string(), "S#\n#G");
    }

    #[test]
    fn scatter_reports_exhaustion() {
        let mut g = grid(2, 2, 0.5);
        for i in 0..3 {
            g.write_state(NodeId(i), NodeState::Wall);
        }
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(
            g.scatter_walls(&mut rng),
            Err(GridError::WallPlacementExhausted {
                placed: 1,
                requested: 2
            })
        );
    }

    #[test]
    fn scatter_leaves_edges_to_connect_all() {
        let mut g = grid(6, 6, 0.3);
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(g.scatter_walls(&mut rng), Ok(10));
        assert!(g.nodes().all(|n| n.degree() == 0));

        g.connect_all().unwrap();
        for n in g.nodes() {
            if n.state() == NodeState::Wall {
                assert_eq!(n.degree(), 0);
                assert!(g.nodes().all(|m| m.weight(n.id()).is_none()));
            }
        }
    }
}
