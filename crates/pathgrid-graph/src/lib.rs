//! Grid graphs for pathfinding demos: random walls, live re-wiring, ASCII
//! layouts and a controller that regenerates until a path exists.

pub mod config;
mod connect;
pub mod controller;
pub mod graph;
pub mod layout;
mod moves;
pub mod walls;

pub use config::{ControllerConfig, DEFAULT_MAX_ATTEMPTS, GridConfig, MAX_WALL_FRACTION, MIN_SIDE};
pub use controller::GridController;
pub use graph::{GridGraph, Terminal};
pub use layout::LayoutError;
pub use walls::DRAWS_PER_WALL;
