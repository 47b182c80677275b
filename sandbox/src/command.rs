//! Line commands and their effect on a [`GridController`].

use std::fmt;
use std::str::FromStr;

use pathgrid_core::GridError;
use pathgrid_graph::{GridController, MAX_WALL_FRACTION, Terminal};
use rand::Rng;

/// Wall fraction change per `+` or `-`.
pub const WALL_STEP: f64 = 0.05;

pub const HELP: &str = "\
w a s d   move start up/left/down/right
i j k l   move goal up/left/down/right
r         regenerate
f         clear marks and search again
+ -       more/fewer walls (regenerates)
?         this help
q         quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Nudge { which: Terminal, dx: i32, dz: i32 },
    Regenerate,
    /// Clear search marks and search the current grid again.
    Search,
    /// Change the wall fraction by the given amount, then regenerate.
    Walls(f64),
    Redraw,
    Help,
    Quit,
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command \u{201c}{}\u{201d}, try ?", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nudge = |which, dx, dz| Command::Nudge { which, dx, dz };
        let cmd = match s.trim() {
            "" => Command::Redraw,
            "w" => nudge(Terminal::Start, 0, -1),
            "a" => nudge(Terminal::Start, -1, 0),
            "s" => nudge(Terminal::Start, 0, 1),
            "d" => nudge(Terminal::Start, 1, 0),
            "i" => nudge(Terminal::Goal, 0, -1),
            "j" => nudge(Terminal::Goal, -1, 0),
            "k" => nudge(Terminal::Goal, 0, 1),
            "l" => nudge(Terminal::Goal, 1, 0),
            "r" => Command::Regenerate,
            "f" => Command::Search,
            "+" => Command::Walls(WALL_STEP),
            "-" => Command::Walls(-WALL_STEP),
            "?" | "h" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => return Err(UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}

impl Command {
    /// Run the command against `controller`.
    pub fn apply<R: Rng>(self, controller: &mut GridController<R>) -> Result<Flow, GridError> {
        match self {
            Command::Nudge { which, dx, dz } => {
                controller.nudge(which, dx, dz)?;
            }
            Command::Regenerate => {
                controller.regenerate()?;
            }
            Command::Search => {
                let found = controller.refresh();
                log::debug!("search again: path found {found}");
            }
            Command::Walls(delta) => {
                let current = controller.config().grid.wall_fraction;
                let next = stepped_fraction(current, delta);
                controller.set_wall_fraction(next)?;
                log::info!("wall fraction {:.0}%", next * 100.0);
                controller.regenerate()?;
            }
            Command::Redraw => {}
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Redraw)
    }
}

/// `current + delta` rounded to whole percent and clamped to the valid range.
pub fn stepped_fraction(current: f64, delta: f64) -> f64 {
    let next = ((current + delta) * 100.0).round() / 100.0;
    next.clamp(0.0, MAX_WALL_FRACTION)
}
