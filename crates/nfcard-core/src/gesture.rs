//! # Drag Gesture
//!
//! A logo drag is one continuous gesture: start, many pointer moves, end.
//! Only the end result is committed to the draft's [`LayoutModel`].
//!
//! ```text
//! begin(committed) ──► update(dx,dy) ──► update(dx,dy) ──► … ──┬──► commit() → committed.drag_by(Σdx, Σdy)
//!                         │                                    │
//!                         └─► preview() (transient, clamped)   └──► cancel() → committed (unchanged)
//! ```
//!
//! Clamping is applied to the accumulated total, so dragging past the margin
//! and back lands where the pointer is, not where the clamp stopped it.

use crate::layout::LayoutModel;

/// Bound on the accumulated delta, in percent. Any total past ±100 already
/// pins the logo to a margin.
pub const MAX_GESTURE_DELTA: f64 = 200.0;

/// An open drag on top of a committed layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    committed: LayoutModel,
    delta_x: f64,
    delta_y: f64,
}

impl DragGesture {
    /// Starts a gesture from the committed layout.
    pub fn begin(committed: &LayoutModel) -> Self {
        DragGesture {
            committed: committed.clone(),
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    /// Accumulates a pointer movement (percent). Non-finite deltas are
    /// dropped; the running total saturates at [`MAX_GESTURE_DELTA`].
    pub fn update(&mut self, delta_x: f64, delta_y: f64) {
        if delta_x.is_finite() && delta_y.is_finite() {
            self.delta_x = (self.delta_x + delta_x).clamp(-MAX_GESTURE_DELTA, MAX_GESTURE_DELTA);
            self.delta_y = (self.delta_y + delta_y).clamp(-MAX_GESTURE_DELTA, MAX_GESTURE_DELTA);
        }
    }

    /// Total uncommitted movement.
    pub fn delta(&self) -> (f64, f64) {
        (self.delta_x, self.delta_y)
    }

    /// Layout at gesture start.
    pub fn committed(&self) -> &LayoutModel {
        &self.committed
    }

    /// Transient layout to display while the pointer is down.
    pub fn preview(&self) -> LayoutModel {
        self.committed.drag_by(self.delta_x, self.delta_y)
    }

    /// Ends the gesture, applying the accumulated movement once.
    pub fn commit(self) -> LayoutModel {
        self.preview()
    }

    /// Abandons the gesture; nothing is applied.
    pub fn cancel(self) -> LayoutModel {
        self.committed
    }
}
