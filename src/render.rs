//! Projection: maps board state to on-screen placements.
//!
//! This layer receives read-only views of the store, viewport, and UI state
//! and produces the data an HTML host needs to position each item — it does
//! not mutate any application state. Items are emitted bottom-first; the
//! item with an active rotate or resize gesture is boosted above everything
//! else so its handles stay reachable.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Point, Viewport};
use crate::consts::{ITEM_BASE_SIZE, RAISED_Z};
use crate::input::UiState;
use crate::item::{BoardStore, ItemId, PinnedItem};

/// On-screen placement of one item.
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: ItemId,
    /// Screen position of the item's center, CSS pixels.
    pub screen_x: f64,
    /// Screen position of the item's center, CSS pixels.
    pub screen_y: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Uniform scale multiplier.
    pub scale: f64,
    /// Effective stacking order, including the active-gesture raise.
    pub z_index: i64,
    /// Whether the host should show selection handles on this item.
    pub selected: bool,
}

/// Project all items to screen space, sorted bottom-first by effective z.
#[must_use]
pub fn project(store: &BoardStore, viewport: &Viewport, ui: &UiState) -> Vec<Placement> {
    let mut placements: Vec<Placement> = store
        .sorted_items()
        .into_iter()
        .map(|item| place(item, viewport, ui))
        .collect();
    placements.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
    placements
}

fn place(item: &PinnedItem, viewport: &Viewport, ui: &UiState) -> Placement {
    let screen = viewport.board_to_screen(Point::new(item.x, item.y));
    let z = if ui.raised_id == Some(item.id) {
        item.z_index + RAISED_Z
    } else {
        item.z_index
    };
    Placement {
        id: item.id,
        screen_x: screen.x,
        screen_y: screen.y,
        rotation: item.rotation,
        scale: item.scale,
        z_index: z,
        selected: ui.selected_id == Some(item.id),
    }
}

/// CSS transform for a placement. Assumes the host element is the item's
/// untransformed base box with `transform-origin: center`, so rotation and
/// scale never shift the item's apparent anchor point.
#[must_use]
pub fn transform_css(placement: &Placement) -> String {
    let half = ITEM_BASE_SIZE * 0.5;
    format!(
        "translate({}px, {}px) rotate({}deg) scale({})",
        placement.screen_x - half,
        placement.screen_y - half,
        placement.rotation,
        placement.scale,
    )
}
