//! Hit-testing against pinned items at their current transformed extent.
//!
//! A scaled or rotated item occupies its true on-screen footprint here, not
//! its untransformed base box: the pointer is inverse-transformed into item
//! local space before the bounds check. A miss across every item is what
//! allows a background press to start a canvas pan.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Viewport};
use crate::consts::{HANDLE_RADIUS_PX, ITEM_BASE_SIZE, ROTATE_HANDLE_OFFSET_PX};
use crate::input::CornerHandle;
use crate::item::{BoardStore, ItemId, PinnedItem};

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(CornerHandle),
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// Test what lies under `screen_pt`, checking the selected item's handles
/// before any item body. Bodies are tested topmost-first.
#[must_use]
pub fn hit_test(
    screen_pt: Point,
    store: &BoardStore,
    viewport: &Viewport,
    selected_id: Option<ItemId>,
) -> Option<Hit> {
    if let Some(sel) = selected_id {
        if let Some(item) = store.get(&sel) {
            if let Some(part) = hit_handles(screen_pt, item, viewport) {
                return Some(Hit { item_id: sel, part });
            }
        }
    }
    for item in store.sorted_items().into_iter().rev() {
        if hit_body(screen_pt, item, viewport) {
            return Some(Hit { item_id: item.id, part: HitPart::Body });
        }
    }
    None
}

/// Screen position of a corner handle at the item's current transform.
#[must_use]
pub fn corner_handle_pos(item: &PinnedItem, viewport: &Viewport, handle: CornerHandle) -> Point {
    let half = half_extent(item);
    let ox = if handle.is_left() { -half } else { half };
    let oy = if handle.is_top() { -half } else { half };
    offset_from_center(item, viewport, ox, oy)
}

/// Screen position of the rotate handle: a fixed offset above the top edge
/// midpoint, following the item's rotation.
#[must_use]
pub fn rotate_handle_pos(item: &PinnedItem, viewport: &Viewport) -> Point {
    offset_from_center(item, viewport, 0.0, -(half_extent(item) + ROTATE_HANDLE_OFFSET_PX))
}

fn hit_handles(screen_pt: Point, item: &PinnedItem, viewport: &Viewport) -> Option<HitPart> {
    if within_handle(screen_pt, rotate_handle_pos(item, viewport)) {
        return Some(HitPart::RotateHandle);
    }
    for handle in CornerHandle::ALL {
        if within_handle(screen_pt, corner_handle_pos(item, viewport, handle)) {
            return Some(HitPart::ResizeHandle(handle));
        }
    }
    None
}

fn hit_body(screen_pt: Point, item: &PinnedItem, viewport: &Viewport) -> bool {
    let center = viewport.board_to_screen(Point::new(item.x, item.y));
    let dx = screen_pt.x - center.x;
    let dy = screen_pt.y - center.y;
    // Inverse transform into item-local space: unrotate, then unscale.
    let theta = item.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();
    let local_x = (dx * cos + dy * sin) / item.scale;
    let local_y = (-dx * sin + dy * cos) / item.scale;
    let half = ITEM_BASE_SIZE * 0.5;
    local_x.abs() <= half && local_y.abs() <= half
}

/// Rotate a local offset by the item's rotation and anchor it at the item's
/// screen-space center.
fn offset_from_center(item: &PinnedItem, viewport: &Viewport, ox: f64, oy: f64) -> Point {
    let center = viewport.board_to_screen(Point::new(item.x, item.y));
    let theta = item.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();
    Point::new(center.x + ox * cos - oy * sin, center.y + ox * sin + oy * cos)
}

fn within_handle(pt: Point, target: Point) -> bool {
    (pt.x - target.x).hypot(pt.y - target.y) <= HANDLE_RADIUS_PX
}

fn half_extent(item: &PinnedItem) -> f64 {
    ITEM_BASE_SIZE * item.scale * 0.5
}
