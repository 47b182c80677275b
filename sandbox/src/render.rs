//! Text rendering of a grid and its status line.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use pathgrid_core::{Coord, NodeState, StateChange};
use pathgrid_graph::{GridController, GridGraph};
use rand::Rng;

/// Foreground colour per node state.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub start: Color,
    pub goal: Color,
    pub open: Color,
    pub wall: Color,
    pub explored: Color,
    pub chosen: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: Color::Rgb { r: 80, g: 200, b: 80 },
            goal: Color::Rgb { r: 255, g: 85, b: 85 },
            open: Color::Rgb { r: 110, g: 115, b: 125 },
            wall: Color::Rgb { r: 150, g: 155, b: 170 },
            explored: Color::Rgb { r: 100, g: 130, b: 255 },
            chosen: Color::Rgb { r: 220, g: 200, b: 60 },
        }
    }
}

impl Palette {
    pub fn color(&self, state: NodeState) -> Color {
        match state {
            NodeState::Start => self.start,
            NodeState::Goal => self.goal,
            NodeState::Open => self.open,
            NodeState::Wall => self.wall,
            NodeState::Explored => self.explored,
            NodeState::Chosen => self.chosen,
        }
    }
}

/// Writes the grid one row per line. `None` emits bare glyphs.
pub fn render_grid(
    out: &mut impl Write,
    graph: &GridGraph,
    palette: Option<&Palette>,
) -> io::Result<()> {
    for z in 0..graph.height() {
        for x in 0..graph.width() {
            let state = graph.state_at(Coord::new(x, z)).unwrap_or_default();
            match palette {
                Some(p) => queue!(out, SetForegroundColor(p.color(state)), Print(state.glyph()))?,
                None => write!(out, "{}", state.glyph())?,
            }
        }
        if palette.is_some() {
            queue!(out, ResetColor)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One-line summary of the last search and the wall settings.
pub fn status_line<R: Rng>(controller: &GridController<R>) -> String {
    let graph = controller.graph();
    let search = match controller.last_path() {
        Some(path) => format!("path found: {} steps, cost {:.2}", path.len().saturating_sub(1), path.cost()),
        None => "no path".to_string(),
    };
    let current = graph.config().wall_fraction;
    let next = controller.config().grid.wall_fraction;
    let walls = if current == next {
        format!("walls {:.0}%", current * 100.0)
    } else {
        format!("walls {:.0}% (next {:.0}%)", current * 100.0, next * 100.0)
    };
    format!(
        "{search} | explored {} | chosen {} | {walls}",
        graph.count(NodeState::Explored),
        graph.count(NodeState::Chosen),
    )
}

/// Number of distinct cells among `changes`.
pub fn changed_cells(changes: &[StateChange]) -> usize {
    changes.iter().map(|c| c.coord).collect::<BTreeSet<_>>().len()
}
