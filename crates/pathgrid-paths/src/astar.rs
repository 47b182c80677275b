use std::collections::BinaryHeap;

use pathgrid_core::{NodeId, NodeState};

use crate::finder::{NO_PARENT, NodeRef, Path, PathFinder, UNREACHABLE};
use crate::traits::{Annotator, AstarPather};

impl PathFinder {
    /// Run A* from `start` to `goal` and report whether the goal is
    /// reachable.
    ///
    /// Every expanded node that is not a terminal is marked
    /// [`NodeState::Explored`]; on success the interior of the chosen path
    /// is marked [`NodeState::Chosen`]. Existing annotations are not
    /// cleared first.
    pub fn find_path<G>(&mut self, graph: &mut G, start: NodeId, goal: NodeId) -> bool
    where
        G: AstarPather + Annotator,
    {
        self.search(graph, start, goal).is_some()
    }

    /// Same as [`find_path`](Self::find_path), returning the chosen path.
    ///
    /// Among open nodes with equal `f`, the one with the lowest id is
    /// expanded first, so results are reproducible.
    pub fn search<G>(&mut self, graph: &mut G, start: NodeId, goal: NodeId) -> Option<Path>
    where
        G: AstarPather + Annotator,
    {
        let len = graph.node_count();
        let start_idx = start.index();
        let goal_idx = goal.index();
        if start_idx >= len || goal_idx >= len {
            return None;
        }
        self.reserve_nodes(len);

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        // Initialise the start node.
        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0.0;
            node.f = graph.estimate(start, goal);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper push or already closed.
            {
                let n = &self.astar_nodes[ci];
                if n.generation != cur_gen || n.closed || n.f != current.f {
                    continue;
                }
            }

            expanded += 1;
            let cid = NodeId(ci);
            if !graph.state(cid).is_terminal() {
                graph.set_state(cid, NodeState::Explored);
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].closed = true;
            let current_g = self.astar_nodes[ci].g;

            nbuf.clear();
            graph.neighbors(cid, &mut nbuf);

            for &(nid, weight) in nbuf.iter() {
                let ni = nid.index();
                if ni >= len {
                    continue;
                }
                let tentative_g = current_g + weight;

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.f = tentative_g + graph.estimate(nid, goal);
                n.parent = ci;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("a*: goal {goal} unreachable from {start} after {expanded} expansions");
            return None;
        }

        // Reconstruct path, marking the interior.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            let id = NodeId(ci);
            if ci != goal_idx && ci != start_idx && !graph.state(id).is_terminal() {
                graph.set_state(id, NodeState::Chosen);
            }
            nodes.push(id);
            ci = self.astar_nodes[ci].parent;
        }
        nodes.reverse();

        let cost = self.astar_nodes[goal_idx].g;
        log::debug!(
            "a*: {start} -> {goal} cost {cost:.3} over {} nodes, {expanded} expansions",
            nodes.len()
        );
        Some(Path { nodes, cost })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::distance::euclidean;
    use crate::traits::Pather;
    use pathgrid_core::{Bounds, Coord};

    /// Small 8-connected grid used to exercise the search without the
    /// graph crate. `#` is a wall, `S`/`G` are terminals.
    pub(crate) struct TestGrid {
        pub(crate) bounds: Bounds,
        pub(crate) states: Vec<NodeState>,
    }

    impl TestGrid {
        pub(crate) fn parse(rows: &[&str]) -> Self {
            let bounds = Bounds::new(rows[0].len() as i32, rows.len() as i32);
            let states = rows
                .iter()
                .flat_map(|r| r.chars())
                .map(|ch| NodeState::from_glyph(ch).unwrap())
                .collect();
            Self { bounds, states }
        }

        pub(crate) fn id(&self, x: i32, z: i32) -> NodeId {
            NodeId(self.bounds.index(Coord::new(x, z)).unwrap())
        }

        pub(crate) fn count(&self, state: NodeState) -> usize {
            self.states.iter().filter(|&&s| s == state).count()
        }
    }

    impl Pather for TestGrid {
        fn node_count(&self) -> usize {
            self.bounds.len()
        }

        fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>) {
            if self.states[id.index()] == NodeState::Wall {
                return;
            }
            let c = self.bounds.coord(id.index());
            for n in self.bounds.neighborhood(c) {
                let ni = self.bounds.index(n).unwrap();
                if self.states[ni] != NodeState::Wall {
                    buf.push((NodeId(ni), euclidean(c, n)));
                }
            }
        }
    }

    impl AstarPather for TestGrid {
        fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
            euclidean(
                self.bounds.coord(from.index()),
                self.bounds.coord(to.index()),
            )
        }
    }

    impl Annotator for TestGrid {
        fn state(&self, id: NodeId) -> NodeState {
            self.states[id.index()]
        }

        fn set_state(&mut self, id: NodeId, state: NodeState) {
            self.states[id.index()] = state;
        }
    }

    #[test]
    fn diagonal_across_open_grid() {
        let mut g = TestGrid::parse(&["S..", "...", "..G"]);
        let (s, t) = (g.id(0, 0), g.id(2, 2));
        let path = PathFinder::new().search(&mut g, s, t).unwrap();
        assert_eq!(path.nodes(), &[s, g.id(1, 1), t]);
        assert!((path.cost() - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(g.state(g.id(1, 1)), NodeState::Chosen);
        assert_eq!(g.state(s), NodeState::Start);
        assert_eq!(g.state(t), NodeState::Goal);
    }

    #[test]
    fn detour_around_center_wall() {
        let mut g = TestGrid::parse(&["S..", ".#.", "..G"]);
        let (s, t) = (g.id(0, 0), g.id(2, 2));
        let path = PathFinder::new().search(&mut g, s, t).unwrap();
        assert!((path.cost() - (2.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert_eq!(path.len(), 4);
        assert_eq!(g.count(NodeState::Chosen), 2);
        // Equal-cost routes exist on both sides; lowest ids are preferred.
        assert_eq!(path.nodes()[1], g.id(1, 0));
    }

    #[test]
    fn blocked_goal_returns_false_and_keeps_explored_marks() {
        let mut g = TestGrid::parse(&["S.#..", "..#..", "..#.G"]);
        let (s, t) = (g.id(0, 0), g.id(4, 2));
        assert!(!PathFinder::new().find_path(&mut g, s, t));
        assert_eq!(g.count(NodeState::Chosen), 0);
        assert_eq!(g.count(NodeState::Explored), 5);
        assert_eq!(g.state(t), NodeState::Goal);
    }

    #[test]
    fn start_equals_goal() {
        let mut g = TestGrid::parse(&["S.", ".G"]);
        let s = g.id(0, 0);
        let path = PathFinder::new().search(&mut g, s, s).unwrap();
        assert_eq!(path.nodes(), &[s]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn out_of_range_ids_find_nothing() {
        let mut g = TestGrid::parse(&["S.", ".G"]);
        assert!(!PathFinder::new().find_path(&mut g, NodeId(0), NodeId(99)));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let rows = ["S....", ".##..", "...#.", ".#...", "....G"];
        let mut pf = PathFinder::new();
        let mut first = TestGrid::parse(&rows);
        let (s, t) = (first.id(0, 0), first.id(4, 4));
        let a = pf.search(&mut first, s, t).unwrap();
        let mut second = TestGrid::parse(&rows);
        let b = pf.search(&mut second, s, t).unwrap();
        assert_eq!(a, b);
        assert_eq!(first.states, second.states);
    }
}
