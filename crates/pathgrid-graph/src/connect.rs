//! Neighbour connectivity: full rebuilds and localized re-wiring.

use pathgrid_core::{Coord, GridError, NodeId};
use pathgrid_paths::euclidean;

use crate::graph::GridGraph;

impl GridGraph {
    /// Recompute every node's edges from scratch.
    ///
    /// Each non-wall node gets one edge per in-bounds non-wall Moore
    /// neighbour. Running it twice yields the same edge sets.
    pub fn connect_all(&mut self) -> Result<(), GridError> {
        for i in 0..self.nodes.len() {
            self.connect_node(NodeId(i))?;
        }
        Ok(())
    }

    /// Re-wire `center` and its Moore neighbourhood.
    ///
    /// A state change at `center` can only affect edges incident to it, all
    /// of which have an endpoint in this neighbourhood.
    pub fn connect_local(&mut self, center: Coord) -> Result<(), GridError> {
        let id = self.require_id(center)?;
        self.connect_node(id)?;
        for n in self.bounds.neighborhood(center) {
            let nid = NodeId(self.bounds.index(n).ok_or(GridError::OutOfBounds(n))?);
            self.connect_node(nid)?;
        }
        Ok(())
    }

    /// Rebuild the outgoing edges of one node.
    fn connect_node(&mut self, id: NodeId) -> Result<(), GridError> {
        let bounds = self.bounds;
        let coord = self.nodes[id.index()].coord();
        self.nodes[id.index()].clear_edges();
        if !self.nodes[id.index()].state().is_passable() {
            return Ok(());
        }
        for n in bounds.neighborhood(coord) {
            let Some(ni) = bounds.index(n) else {
                continue;
            };
            // Walls are ignored.
            if !self.nodes[ni].state().is_passable() {
                continue;
            }
            self.nodes[id.index()].add_edge(NodeId(ni), euclidean(coord, n))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use pathgrid_core::NodeState;
    use std::f64::consts::SQRT_2;

    fn open_grid(w: i32, h: i32) -> GridGraph {
        let mut g = GridGraph::new(GridConfig::new(w, h, 0.0)).unwrap();
        g.connect_all().unwrap();
        g
    }

    #[test]
    fn degrees_on_open_grid() {
        let g = open_grid(3, 3);
        assert_eq!(g.node_at(Coord::new(0, 0)).unwrap().degree(), 3);
        assert_eq!(g.node_at(Coord::new(1, 0)).unwrap().degree(), 5);
        assert_eq!(g.node_at(Coord::new(1, 1)).unwrap().degree(), 8);
    }

    #[test]
    fn weights_are_euclidean() {
        let g = open_grid(2, 2);
        let edges = g.edges_at(Coord::ZERO).unwrap();
        assert_eq!(
            edges,
            vec![
                (Coord::new(1, 0), 1.0),
                (Coord::new(0, 1), 1.0),
                (Coord::new(1, 1), euclidean(Coord::ZERO, Coord::new(1, 1))),
            ]
        );
        assert!((edges[2].1 - SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn walls_are_isolated() {
        let mut g = open_grid(3, 3);
        let center = Coord::new(1, 1);
        let id = g.id_of(center).unwrap();
        g.write_state(id, NodeState::Wall);
        g.connect_local(center).unwrap();
        assert_eq!(g.node(id).degree(), 0);
        assert!(g.nodes().all(|n| n.weight(id).is_none()));
        assert_eq!(g.node_at(Coord::ZERO).unwrap().degree(), 2);
    }

    #[test]
    fn local_rewire_matches_full_rebuild() {
        let mut g = open_grid(4, 4);
        let c = Coord::new(2, 1);
        let id = g.id_of(c).unwrap();
        g.write_state(id, NodeState::Wall);
        g.connect_local(c).unwrap();
        let local: Vec<Vec<(NodeId, f64)>> = g.nodes().map(|n| n.edges().collect()).collect();

        g.connect_all().unwrap();
        let full: Vec<Vec<(NodeId, f64)>> = g.nodes().map(|n| n.edges().collect()).collect();
        assert_eq!(local, full);

        g.write_state(id, NodeState::Open);
        g.connect_local(c).unwrap();
        assert_eq!(g.node(id).degree(), 8);
    }

    #[test]
    fn connect_all_is_idempotent() {
        let mut g = open_grid(3, 4);
        let first: Vec<usize> = g.nodes().map(|n| n.degree()).collect();
        g.connect_all().unwrap();
        let second: Vec<usize> = g.nodes().map(|n| n.degree()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn connect_local_out_of_bounds() {
        let mut g = open_grid(2, 2);
        let far = Coord::new(-1, 0);
        assert_eq!(g.connect_local(far), Err(GridError::OutOfBounds(far)));
    }
}
