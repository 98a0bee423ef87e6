//! Input model: buttons, keys, corner handles, and the gesture state machine.
//!
//! `GestureState` is the active gesture being tracked between pointer-down
//! and pointer-up, carrying all context needed to compute incremental deltas
//! and emit final commits on release. Exactly one gesture can be active at a
//! time and each variant owns its own context, so illegal combinations
//! (rotating and resizing the same item at once) are unrepresentable.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::item::ItemId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser
/// (e.g. `"Delete"`, `"Backspace"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// One of the four corner resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerHandle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl CornerHandle {
    /// All four corners, in render order.
    pub const ALL: [CornerHandle; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// Whether this handle sits on the item's left edge.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// Whether this handle sits on the item's top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }
}

/// Persistent UI state visible to the projection layer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected item, if any.
    pub selected_id: Option<ItemId>,
    /// Item temporarily elevated above all others by an active rotate or
    /// resize gesture. Cleared on gesture end.
    pub raised_id: Option<ItemId>,
}

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas by dragging the background.
    Panning {
        /// Screen position of the pointer at gesture start.
        start_screen: Point,
        /// Scroll offset at gesture start; moves re-derive from here.
        start_scroll: Point,
    },
    /// The user is moving an item across the board.
    Dragging {
        /// Id of the item being dragged.
        id: ItemId,
        /// Board-space pointer position at gesture start.
        start_board: Point,
        /// Item center x at gesture start.
        orig_x: f64,
        /// Item center y at gesture start.
        orig_y: f64,
    },
    /// The user is rotating an item via its rotate handle.
    Rotating {
        /// Id of the item being rotated.
        id: ItemId,
        /// Screen-space center of the item; the rotation pivot.
        center_screen: Point,
        /// Pointer angle around the pivot at gesture start, radians.
        start_angle: f64,
        /// Item rotation at gesture start, degrees.
        orig_rotation: f64,
    },
    /// The user is resizing an item via a corner handle.
    Resizing {
        /// Id of the item being resized.
        id: ItemId,
        /// Which corner handle is being dragged.
        handle: CornerHandle,
        /// Screen position of the pointer at gesture start.
        start_screen: Point,
        /// Item scale at gesture start.
        orig_scale: f64,
    },
}

impl GestureState {
    /// The item owning the active gesture, if the gesture is item-bound.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::Idle | Self::Panning { .. } => None,
            Self::Dragging { id, .. } | Self::Rotating { id, .. } | Self::Resizing { id, .. } => {
                Some(*id)
            }
        }
    }

    /// Whether this gesture holds a document-level listener capture.
    ///
    /// Rotate and resize track the pointer at document scope because the
    /// pointer routinely leaves the small handle hit-area mid-gesture.
    #[must_use]
    pub fn holds_document_capture(&self) -> bool {
        matches!(self, Self::Rotating { .. } | Self::Resizing { .. })
    }
}
