//! Search algorithms over weighted grid graphs.
//!
//! - **A\*** shortest-path search that annotates the nodes it touches
//!   ([`PathFinder::find_path`], [`PathFinder::search`])
//! - **BFS** reachability flood ([`PathFinder::reachable`])
//! - **Dijkstra** exact cost maps ([`PathFinder::dijkstra_costs`])
//!
//! BFS and Dijkstra never write node states; they serve as references to
//! check A* results against.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, Dijkstra |
//! | [`AstarPather`] : [`Pather`] | A* (with [`Annotator`]) |

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod finder;
mod traits;

pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use finder::{Path, PathFinder, UNREACHABLE};
pub use traits::{Annotator, AstarPather, Pather};
