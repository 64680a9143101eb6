//! Detail overlay: one person's full details plus prev/next navigation.
//!
//! The overlay captures a snapshot of its scope list and an index into it
//! when it opens. Navigation is plain index arithmetic on that snapshot, so
//! later changes to the store's filtered view cannot desynchronize it.

use tracing::{debug, warn};

use crate::models::{Person, PersonId};

/// Navigation direction within the scope list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Focusable controls inside the overlay, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayControl {
    Close,
    Prev,
    Next,
}

impl OverlayControl {
    const ORDER: [OverlayControl; 3] = [
        OverlayControl::Close,
        OverlayControl::Prev,
        OverlayControl::Next,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OverlayControl::Close => "X",
            OverlayControl::Prev => "Prev",
            OverlayControl::Next => "Next",
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next control, wrapping from the last back to the first
    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping from the first back to the last
    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone)]
struct OpenState {
    scope: Vec<Person>,
    index: usize,
    focus: OverlayControl,
}

#[derive(Debug, Default)]
pub struct DetailOverlay {
    state: Option<OpenState>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `id` within `scope`, replacing any overlay already open.
    ///
    /// Returns false and stays closed when the id is not in the scope.
    pub fn open(&mut self, id: PersonId, scope: &[Person]) -> bool {
        self.close();

        let Some(index) = scope.iter().position(|p| p.id == id) else {
            warn!(%id, scope_len = scope.len(), "Person not in overlay scope, not opening");
            return false;
        };

        debug!(%id, index, scope_len = scope.len(), "Overlay opened");
        self.state = Some(OpenState {
            scope: scope.to_vec(),
            index,
            focus: OverlayControl::Close,
        });
        true
    }

    /// Step to the neighbouring person, wrapping at both ends.
    /// Does nothing when closed.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(state) = self.state.take() else {
            return;
        };

        let len = state.scope.len() as isize;
        let index = (state.index as isize + direction.step()).rem_euclid(len) as usize;

        debug!(?direction, from = state.index, to = index, "Overlay navigated");
        // Re-entering the open state resets focus like a fresh open
        self.state = Some(OpenState {
            scope: state.scope,
            index,
            focus: OverlayControl::Close,
        });
    }

    pub fn close(&mut self) {
        if self.state.take().is_some() {
            debug!("Overlay closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// The person currently shown
    pub fn current(&self) -> Option<&Person> {
        self.state.as_ref().and_then(|s| s.scope.get(s.index))
    }

    /// 1-based position and scope length, e.g. `(2, 12)`
    pub fn position(&self) -> Option<(usize, usize)> {
        self.state.as_ref().map(|s| (s.index + 1, s.scope.len()))
    }

    pub fn focus(&self) -> Option<OverlayControl> {
        self.state.as_ref().map(|s| s.focus)
    }

    /// Move focus forward, cycling within the overlay's controls
    pub fn focus_next(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.focus = state.focus.next();
        }
    }

    /// Move focus backward, cycling within the overlay's controls
    pub fn focus_prev(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.focus = state.focus.prev();
        }
    }

    pub fn set_focus(&mut self, control: OverlayControl) {
        if let Some(state) = self.state.as_mut() {
            state.focus = control;
        }
    }

    /// Perform the action of the focused control
    pub fn activate(&mut self) {
        match self.focus() {
            Some(OverlayControl::Close) => self.close(),
            Some(OverlayControl::Prev) => self.navigate(Direction::Prev),
            Some(OverlayControl::Next) => self.navigate(Direction::Next),
            None => {}
        }
    }
}
