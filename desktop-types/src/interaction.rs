//! Pointer interaction state machine for moving and resizing windows.
//!
//! A session begins on pointer-down over a window header or its resize handle
//! and ends on pointer-up. Releasing the pointer always commits; there is no
//! abort path.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};
use crate::window::{WindowCollection, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCorner {
    BottomRight,
}

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Header(WindowId),
    ResizeHandle(WindowId, ResizeCorner),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        window_id: WindowId,
        /// Pointer position relative to the window origin at pointer-down.
        grab_offset: Point,
    },
    Resizing {
        window_id: WindowId,
        corner: ResizeCorner,
    },
}

/// Change a pointer event asks the window collection to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowUpdate {
    Move { id: WindowId, position: Point },
    Resize { id: WindowId, size: Size },
}

impl WindowUpdate {
    pub fn apply(self, windows: &mut WindowCollection) {
        match self {
            WindowUpdate::Move { id, position } => {
                windows.update_position(id, position.x, position.y)
            }
            WindowUpdate::Resize { id, size } => windows.update_size(id, size.width, size.height),
        }
    }
}

/// Size that puts the bottom-right corner under `pointer`, never below `min`.
pub fn resize_to_pointer(origin: Point, pointer: Point, min: Size) -> Size {
    let span = pointer - origin;
    Size::new(span.x, span.y).at_least(min)
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Window the active session is bound to.
    pub fn target(&self) -> Option<WindowId> {
        match *self {
            Interaction::Idle => None,
            Interaction::Dragging { window_id, .. } | Interaction::Resizing { window_id, .. } => {
                Some(window_id)
            }
        }
    }

    pub fn is_dragging(&self, id: WindowId) -> bool {
        matches!(*self, Interaction::Dragging { window_id, .. } if window_id == id)
    }

    /// Enter a session. Ignored unless idle and the window exists.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        point: Point,
        windows: &WindowCollection,
    ) -> bool {
        if !self.is_idle() {
            tracing::debug!(?target, "Pointer down during active session ignored");
            return false;
        }

        let next = match target {
            PointerTarget::Header(id) => windows.get(id).map(|window| Interaction::Dragging {
                window_id: id,
                grab_offset: point - window.position,
            }),
            PointerTarget::ResizeHandle(id, corner) => {
                windows.contains(id).then_some(Interaction::Resizing {
                    window_id: id,
                    corner,
                })
            }
        };

        match next {
            Some(next) => {
                tracing::debug!(session = ?next, "Pointer session started");
                *self = next;
                true
            }
            None => {
                tracing::debug!(?target, "Pointer down on unknown window ignored");
                false
            }
        }
    }

    /// Update the active session's window would receive for `point`.
    pub fn pointer_move(&self, point: Point, windows: &WindowCollection) -> Option<WindowUpdate> {
        match *self {
            Interaction::Idle => None,
            Interaction::Dragging {
                window_id,
                grab_offset,
            } => Some(WindowUpdate::Move {
                id: window_id,
                position: point - grab_offset,
            }),
            Interaction::Resizing {
                window_id,
                corner: ResizeCorner::BottomRight,
            } => {
                let window = windows.get(window_id)?;
                Some(WindowUpdate::Resize {
                    id: window_id,
                    size: resize_to_pointer(window.position, point, windows.config().min_size()),
                })
            }
        }
    }

    /// Final update for the release point; the machine returns to idle.
    pub fn pointer_up(&mut self, point: Point, windows: &WindowCollection) -> Option<WindowUpdate> {
        let update = self.pointer_move(point, windows);
        if !self.is_idle() {
            tracing::debug!(session = ?self, "Pointer session committed");
        }
        *self = Interaction::Idle;
        update
    }

    /// Drop the session if it targets `id`.
    pub fn release_window(&mut self, id: WindowId) {
        if self.target() == Some(id) {
            *self = Interaction::Idle;
        }
    }
}
