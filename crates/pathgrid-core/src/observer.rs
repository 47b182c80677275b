//! State-change notifications for visualizers.
//!
//! The graph calls a [`NodeObserver`] synchronously every time it writes a
//! node's state. The observer owns all rendering concerns; the core never
//! waits on it or reads anything back.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geom::Coord;
use crate::node::NodeState;

/// Receiver of node state writes.
pub trait NodeObserver {
    fn on_node_state_changed(&mut self, coord: Coord, state: NodeState);
}

impl<F> NodeObserver for F
where
    F: FnMut(Coord, NodeState),
{
    fn on_node_state_changed(&mut self, coord: Coord, state: NodeState) {
        self(coord, state)
    }
}

/// A single recorded notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateChange {
    pub coord: Coord,
    pub state: NodeState,
}

/// Observer that appends every notification to a shared buffer.
///
/// Clones share the same buffer, so one clone can be handed to a graph
/// while another is kept to inspect what happened.
#[derive(Debug, Clone, Default)]
pub struct StateLog {
    changes: Rc<RefCell<Vec<StateChange>>>,
}

impl StateLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications recorded since the last clear.
    pub fn len(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }

    /// Copy of the recorded notifications, oldest first.
    pub fn changes(&self) -> Vec<StateChange> {
        self.changes.borrow().clone()
    }

    /// Remove and return the recorded notifications.
    pub fn take(&self) -> Vec<StateChange> {
        std::mem::take(&mut *self.changes.borrow_mut())
    }

    pub fn clear(&self) {
        self.changes.borrow_mut().clear();
    }

    /// Latest state reported for `coord`, if any.
    pub fn last_state(&self, coord: Coord) -> Option<NodeState> {
        self.changes
            .borrow()
            .iter()
            .rev()
            .find(|c| c.coord == coord)
            .map(|c| c.state)
    }
}

impl NodeObserver for StateLog {
    fn on_node_state_changed(&mut self, coord: Coord, state: NodeState) {
        self.changes.borrow_mut().push(StateChange { coord, state });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let log = StateLog::new();
        let mut handle = log.clone();
        handle.on_node_state_changed(Coord::new(1, 2), NodeState::Wall);
        handle.on_node_state_changed(Coord::new(1, 2), NodeState::Open);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last_state(Coord::new(1, 2)), Some(NodeState::Open));
        assert_eq!(log.last_state(Coord::ZERO), None);
    }

    #[test]
    fn take_drains() {
        let mut log = StateLog::new();
        log.on_node_state_changed(Coord::ZERO, NodeState::Start);
        let taken = log.take();
        assert_eq!(
            taken,
            vec![StateChange {
                coord: Coord::ZERO,
                state: NodeState::Start
            }]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = 0;
        {
            let mut obs = |_: Coord, _: NodeState| seen += 1;
            obs.on_node_state_changed(Coord::ZERO, NodeState::Goal);
            obs.on_node_state_changed(Coord::ZERO, NodeState::Open);
        }
        assert_eq!(seen, 2);
    }
}
