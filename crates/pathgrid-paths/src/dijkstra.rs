use std::collections::BinaryHeap;

use pathgrid_core::NodeId;

use crate::PathFinder;
use crate::finder::{NodeRef, UNREACHABLE};
use crate::traits::Pather;

impl PathFinder {
    /// Compute exact minimum path costs from a set of sources.
    ///
    /// Every source starts at cost 0. The returned vector is indexed by
    /// node id and holds [`UNREACHABLE`] for nodes no source reaches. Node
    /// states are not touched.
    pub fn dijkstra_costs<P: Pather>(&mut self, pather: &P, sources: &[NodeId]) -> Vec<f64> {
        let len = pather.node_count();
        self.reserve_nodes(len);

        self.dijkstra_generation = self.dijkstra_generation.wrapping_add(1);
        let cur_gen = self.dijkstra_generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        // Seed sources.
        for &src in sources {
            let si = src.index();
            if si >= len {
                continue;
            }
            let n = &mut self.dijkstra_nodes[si];
            n.g = 0.0;
            n.f = 0.0;
            n.generation = cur_gen;
            n.closed = false;
            open.push(NodeRef { idx: si, f: 0.0 });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.dijkstra_nodes[ci];
            if cn.generation != cur_gen || cn.closed || cn.g != current.f {
                continue;
            }
            let current_g = cn.g;
            self.dijkstra_nodes[ci].closed = true;

            nbuf.clear();
            pather.neighbors(NodeId(ci), &mut nbuf);

            for &(nid, weight) in nbuf.iter() {
                let ni = nid.index();
                if ni >= len {
                    continue;
                }
                let tentative = current_g + weight;

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.f = tentative;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.nbuf = nbuf;

        (0..len)
            .map(|i| {
                let n = &self.dijkstra_nodes[i];
                if n.generation == cur_gen { n.g } else { UNREACHABLE }
            })
            .collect()
    }

    /// Minimum path cost between two nodes, or [`UNREACHABLE`].
    pub fn min_cost<P: Pather>(&mut self, pather: &P, from: NodeId, to: NodeId) -> f64 {
        self.dijkstra_costs(pather, &[from])
            .get(to.index())
            .copied()
            .unwrap_or(UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::tests::TestGrid;
    use std::f64::consts::SQRT_2;

    #[test]
    fn costs_on_open_grid() {
        let g = TestGrid::parse(&["S..", "...", "..G"]);
        let costs = PathFinder::new().dijkstra_costs(&g, &[g.id(0, 0)]);
        assert_eq!(costs[g.id(0, 0).index()], 0.0);
        assert_eq!(costs[g.id(2, 0).index()], 2.0);
        assert!((costs[g.id(2, 2).index()] - 2.0 * SQRT_2).abs() < 1e-9);
        assert!((costs[g.id(2, 1).index()] - (1.0 + SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn walls_and_unreachable() {
        let g = TestGrid::parse(&["S.#..", "..#..", "..#.G"]);
        let mut pf = PathFinder::new();
        let costs = pf.dijkstra_costs(&g, &[g.id(0, 0)]);
        assert_eq!(costs[g.id(4, 2).index()], UNREACHABLE);
        assert_eq!(costs[g.id(2, 0).index()], UNREACHABLE);
        assert!((pf.min_cost(&g, g.id(3, 0), g.id(4, 2)) - (1.0 + SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn multi_source_takes_nearest() {
        let g = TestGrid::parse(&["S...G"]);
        let costs = PathFinder::new().dijkstra_costs(&g, &[g.id(0, 0), g.id(4, 0)]);
        assert_eq!(costs, vec![0.0, 1.0, 2.0, 1.0, 0.0]);
    }
}
