//! **pathgrid-core**: core types for the grid pathfinding sandbox.
//!
//! This crate provides the foundational types shared by the pathgrid
//! crates: grid coordinates and bounds, graph nodes with their visualization
//! state, the error taxonomy, and the observer interface through which a
//! visualizer learns about state changes.

pub mod error;
pub mod geom;
pub mod node;
pub mod observer;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Coord};
pub use node::{Node, NodeId, NodeState};
pub use observer::{NodeObserver, StateChange, StateLog};
