use std::collections::VecDeque;

use pathgrid_core::NodeId;

use crate::PathFinder;
use crate::traits::Pather;

impl PathFinder {
    /// Breadth-first flood from `start` over the current edge set.
    ///
    /// Returns every reachable node, `start` included, in visit order.
    /// Node states are not touched.
    pub fn reachable<P: Pather>(&mut self, pather: &P, start: NodeId) -> Vec<NodeId> {
        let len = pather.node_count();
        let mut result = Vec::new();
        if start.index() >= len {
            return result;
        }

        // Reset.
        self.bfs_seen.clear();
        self.bfs_seen.resize(len, false);

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        self.bfs_seen[start.index()] = true;
        queue.push_back(start);
        result.push(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = queue.pop_front() {
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &(nid, _) in nbuf.iter() {
                let ni = nid.index();
                if ni >= len || self.bfs_seen[ni] {
                    continue;
                }
                self.bfs_seen[ni] = true;
                queue.push_back(nid);
                result.push(nid);
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Whether `to` is reachable from `from`, by breadth-first search.
    pub fn is_reachable<P: Pather>(&mut self, pather: &P, from: NodeId, to: NodeId) -> bool {
        self.reachable(pather, from).contains(&to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::tests::TestGrid;
    use pathgrid_core::NodeState;

    #[test]
    fn flood_stays_inside_component() {
        let g = TestGrid::parse(&["S.#..", "..#..", "..#.G"]);
        let mut pf = PathFinder::new();
        let left = pf.reachable(&g, g.id(0, 0));
        assert_eq!(left.len(), 6);
        assert!(!pf.is_reachable(&g, g.id(0, 0), g.id(4, 2)));
        assert!(pf.is_reachable(&g, g.id(3, 0), g.id(4, 2)));
    }

    #[test]
    fn diagonal_gap_connects() {
        let g = TestGrid::parse(&["S#", "#G"]);
        let mut pf = PathFinder::new();
        assert!(pf.is_reachable(&g, g.id(0, 0), g.id(1, 1)));
    }

    #[test]
    fn flood_does_not_annotate() {
        let g = TestGrid::parse(&["S..", "...", "..G"]);
        PathFinder::new().reachable(&g, g.id(0, 0));
        assert_eq!(g.count(NodeState::Explored), 0);
    }
}
