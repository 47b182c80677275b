//! Relocating the start and goal nodes.

use pathgrid_core::{Coord, GridError, NodeState};

use crate::graph::{GridGraph, Terminal};

impl GridGraph {
    /// Move the start node to `pos`. See [`move_terminal`](Self::move_terminal).
    pub fn move_start(&mut self, pos: Coord) -> Result<(), GridError> {
        self.move_terminal(Terminal::Start, pos)
    }

    /// Move the goal node to `pos`. See [`move_terminal`](Self::move_terminal).
    pub fn move_goal(&mut self, pos: Coord) -> Result<(), GridError> {
        self.move_terminal(Terminal::Goal, pos)
    }

    /// Move a terminal to `pos`.
    ///
    /// Moving onto the terminal's current cell changes nothing and notifies
    /// no one. A `Wall` target or the other terminal's cell is refused with
    /// [`GridError::TargetBlocked`]. On success the old cell reverts to
    /// `Open`, the new cell's neighbourhood is re-wired and all search
    /// annotations are cleared.
    pub fn move_terminal(&mut self, which: Terminal, pos: Coord) -> Result<(), GridError> {
        let target = self.require_id(pos)?;
        let current = self.terminal_id(which);
        if current == Some(target) {
            return Ok(());
        }

        let state = self.node(target).state();
        if state == NodeState::Wall || state == which.other().state() {
            return Err(GridError::TargetBlocked { pos, state });
        }

        if let Some(old) = current {
            self.write_state(old, NodeState::Open);
        }
        self.write_state(target, which.state());
        match which {
            Terminal::Start => self.start = Some(target),
            Terminal::Goal => self.goal = Some(target),
        }
        self.connect_local(pos)?;
        let cleared = self.clear_annotations();
        log::debug!("{} moved to {pos}, {cleared} annotations cleared", which.state());
        Ok(())
    }
}
