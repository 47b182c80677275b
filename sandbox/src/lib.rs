//! Terminal front end for the pathgrid demo: line commands and a coloured
//! text renderer.

pub mod command;
pub mod render;

pub use command::{Command, Flow, HELP, UnknownCommand};
pub use render::{Palette, changed_cells, render_grid, status_line};
