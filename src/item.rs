//! Item model: pinned items, their properties, and the in-memory store.
//!
//! This module defines the core data types that describe what is pinned to
//! the board (`PinnedItem`, `ItemKind`, `NoteColor`), a sparse-update type
//! for incremental edits (`PartialPinnedItem`), and the runtime store that
//! owns all live items (`BoardStore`).
//!
//! Data flows into this layer from persistence (JSON deserialization) and
//! from the input engine (mutations). The projection layer reads from
//! `BoardStore` via `sorted_items` to determine stacking order.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom;

/// Unique identifier for a pinned item.
pub type ItemId = Uuid;

/// The kind of a pinned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// A cropped photograph; `content` holds the displayable image reference.
    Image,
    /// A memory note card with body text and optional title/date.
    MemoryNote,
    /// A love note card with body text.
    LoveNote,
}

impl ItemKind {
    /// Whether this kind renders as a note card (title, date, and color apply).
    #[must_use]
    pub fn is_note(self) -> bool {
        matches!(self, Self::MemoryNote | Self::LoveNote)
    }
}

/// Visual tag for note items, drawn from a fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Cream,
    Rose,
    Sage,
    Sky,
    Lavender,
}

impl NoteColor {
    /// The full palette, in picker order.
    pub const PALETTE: [NoteColor; 5] =
        [Self::Cream, Self::Rose, Self::Sage, Self::Sky, Self::Lavender];

    /// CSS color for this palette entry.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Cream => "#FBF3E4",
            Self::Rose => "#F4C7C3",
            Self::Sage => "#CDE0CC",
            Self::Sky => "#C6DBEF",
            Self::Lavender => "#DCD0EA",
        }
    }
}

/// A pinned item as stored on the board and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// What the item is; drives rendering and which optional fields apply.
    pub kind: ItemKind,
    /// Body text for notes; displayable image reference for images.
    pub content: String,
    /// Heading text; meaningful for note kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display date; meaningful for note kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Center of the item in board coordinates.
    pub x: f64,
    /// Center of the item in board coordinates.
    pub y: f64,
    /// Clockwise rotation in degrees around the item center. Unbounded;
    /// wraps implicitly through the trigonometry that consumes it.
    pub rotation: f64,
    /// Uniform scale multiplier, always within the scale bounds.
    pub scale: f64,
    /// Palette tag; meaningful for note kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    /// Stacking order; lower values sit beneath higher values.
    pub z_index: i64,
}

/// Sparse update for a pinned item. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialPinnedItem {
    /// New center x, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New center y, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New scale, if being updated. Clamped to the scale bounds on write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// New z-index, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
    /// New body text, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New title, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New date, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// New palette tag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
}

/// In-memory store of pinned items.
pub struct BoardStore {
    items: HashMap<ItemId, PinnedItem>,
}

impl BoardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Insert or replace an item, clamping its scale into bounds. If an item
    /// with the same `id` already exists it is overwritten.
    pub fn insert(&mut self, mut item: PinnedItem) {
        item.scale = geom::clamp_scale(item.scale);
        self.items.insert(item.id, item);
    }

    /// Remove an item by id, returning it if it was present. Removing an
    /// absent id is a no-op.
    pub fn remove(&mut self, id: &ItemId) -> Option<PinnedItem> {
        self.items.remove(id)
    }

    /// Return a reference to an item by id. Callers must handle absence —
    /// an item may be deleted while a gesture on it is still active.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&PinnedItem> {
        self.items.get(id)
    }

    /// Apply a partial update to an existing item. Returns false if the
    /// item doesn't exist. Scale updates are clamped into bounds.
    pub fn apply_partial(&mut self, id: &ItemId, partial: &PartialPinnedItem) -> bool {
        let Some(item) = self.items.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            item.x = x;
        }
        if let Some(y) = partial.y {
            item.y = y;
        }
        if let Some(r) = partial.rotation {
            item.rotation = r;
        }
        if let Some(s) = partial.scale {
            item.scale = geom::clamp_scale(s);
        }
        if let Some(z) = partial.z_index {
            item.z_index = z;
        }
        if let Some(ref content) = partial.content {
            item.content.clone_from(content);
        }
        if let Some(ref title) = partial.title {
            item.title = Some(title.clone());
        }
        if let Some(ref date) = partial.date {
            item.date = Some(date.clone());
        }
        if let Some(color) = partial.color {
            item.color = Some(color);
        }
        true
    }

    /// Replace all items with a full snapshot.
    pub fn load_snapshot(&mut self, items: Vec<PinnedItem>) {
        self.items.clear();
        for item in items {
            self.insert(item);
        }
    }

    /// Return all items sorted by `(z_index, id)` for stacking order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&PinnedItem> {
        let mut items: Vec<&PinnedItem> = self.items.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// The next z-index above every item currently on the board.
    #[must_use]
    pub fn next_z(&self) -> i64 {
        self.items.values().map(|i| i.z_index).max().map_or(0, |z| z + 1)
    }

    /// Number of items currently on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the board holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
