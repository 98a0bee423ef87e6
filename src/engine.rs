//! Engine: pointer/key event handlers and board operations.
//!
//! Hosts feed raw events in; the engine mutates its store and viewport and
//! returns [`Action`]s describing what the host must do next — persist a
//! commit, attach or release the document-level listener capture, update
//! the cursor, or redraw. All handlers are synchronous; drag, rotate, and
//! resize write the store live on every move so feedback is immediate, and
//! the final commit is emitted once on release.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use log::debug;
use rand::Rng;
use uuid::Uuid;

use crate::camera::{Point, Viewport};
use crate::consts::{SPAWN_JITTER, SPAWN_TILT_DEG};
use crate::error::BoardError;
use crate::geom;
use crate::hit::{self, Hit, HitPart};
use crate::input::{Button, GestureState, Key, UiState};
use crate::item::{BoardStore, ItemId, ItemKind, NoteColor, PartialPinnedItem, PinnedItem};

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A new item entered the board; persist it.
    ItemCreated(PinnedItem),
    /// A gesture or edit committed changes; persist them.
    ItemUpdated { id: ItemId, fields: PartialPinnedItem },
    /// An item left the board; persist the deletion.
    ItemDeleted { id: ItemId },
    /// A rotate or resize gesture started; attach the document-level
    /// move/up listener pair.
    CaptureDocument,
    /// The document-scoped gesture ended; detach the listener pair.
    ReleaseDocument,
    /// Update the host cursor.
    SetCursor(String),
    /// Visible state changed; redraw.
    RenderNeeded,
}

/// Payload for creating a new item: content plus the optional note fields.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    /// Body text for notes; displayable image reference for images.
    pub content: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub color: Option<NoteColor>,
}

/// Core engine state — all logic that doesn't depend on the browser.
pub struct EngineCore {
    pub store: BoardStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub gesture: GestureState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            store: BoardStore::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            gesture: GestureState::Idle,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the board from a persistence snapshot.
    pub fn load_snapshot(&mut self, items: Vec<PinnedItem>) {
        self.store.load_snapshot(items);
    }

    /// Update viewport dimensions in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    // --- Board operations ---

    /// Add a new item near the viewport center with a small random offset
    /// and tilt for visual variety. Returns the new item's id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when a note kind is added without
    /// body text.
    pub fn add_item(&mut self, kind: ItemKind, payload: NewItem) -> Result<ItemId, BoardError> {
        if kind.is_note() && payload.content.trim().is_empty() {
            return Err(BoardError::Validation { field: "content" });
        }
        let mut rng = rand::rng();
        let center = self.viewport.center();
        let item = PinnedItem {
            id: Uuid::new_v4(),
            kind,
            content: payload.content,
            title: if kind.is_note() { payload.title } else { None },
            date: if kind.is_note() { payload.date } else { None },
            x: center.x + rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
            y: center.y + rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
            rotation: rng.random_range(-SPAWN_TILT_DEG..=SPAWN_TILT_DEG),
            scale: 1.0,
            color: if kind.is_note() { payload.color } else { None },
            z_index: self.store.next_z(),
        };
        let id = item.id;
        debug!("item added: {id} ({kind:?})");
        self.store.insert(item);
        self.ui.selected_id = Some(id);
        Ok(id)
    }

    /// Apply a sparse edit to an item, as used by edit forms. Returns the
    /// commit action. Unlike gesture previews, which silently no-op on a
    /// vanished item, an edit form needs to tell the user their target is
    /// gone.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the item no longer exists.
    pub fn update_item(
        &mut self,
        id: &ItemId,
        fields: PartialPinnedItem,
    ) -> Result<Action, BoardError> {
        if self.store.apply_partial(id, &fields) {
            Ok(Action::ItemUpdated { id: *id, fields })
        } else {
            Err(BoardError::NotFound { id: *id })
        }
    }

    /// Remove an item. Removing an absent id is a no-op; removing the item
    /// a gesture is bound to leaves that gesture's handlers safely inert.
    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Action> {
        let Some(removed) = self.store.remove(id) else {
            return Vec::new();
        };
        if self.ui.selected_id == Some(removed.id) {
            self.ui.selected_id = None;
        }
        if self.ui.raised_id == Some(removed.id) {
            self.ui.raised_id = None;
        }
        debug!("item removed: {}", removed.id);
        vec![Action::ItemDeleted { id: removed.id }, Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&PinnedItem> {
        self.store.get(id)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        // A down event while a gesture is active means its pointer-up was
        // lost. End the old gesture with release semantics first so the
        // document capture and the raise never leak into the new one.
        let mut actions = match self.gesture {
            GestureState::Idle => Vec::new(),
            _ => self.finish_gesture(),
        };
        let started = match button {
            Button::Secondary => Vec::new(),
            Button::Middle => {
                self.begin_pan(screen_pt);
                vec![Action::SetCursor("grabbing".into())]
            }
            Button::Primary => self.primary_down(screen_pt),
        };
        actions.extend(started);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.gesture.clone() {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { start_screen, start_scroll } => {
                // Inverse adjustment: dragging right scrolls the view left.
                self.viewport.set_scroll(
                    start_scroll.x - (screen_pt.x - start_screen.x),
                    start_scroll.y - (screen_pt.y - start_screen.y),
                );
                vec![Action::RenderNeeded]
            }
            GestureState::Dragging { id, start_board, orig_x, orig_y } => {
                let board = self.viewport.screen_to_board(screen_pt);
                self.preview(&id, PartialPinnedItem {
                    x: Some(orig_x + board.x - start_board.x),
                    y: Some(orig_y + board.y - start_board.y),
                    ..PartialPinnedItem::default()
                })
            }
            GestureState::Rotating { id, center_screen, start_angle, orig_rotation } => {
                let angle = geom::angle_of(screen_pt, center_screen);
                self.preview(&id, PartialPinnedItem {
                    rotation: Some(orig_rotation + geom::rotation_delta(start_angle, angle)),
                    ..PartialPinnedItem::default()
                })
            }
            GestureState::Resizing { id, handle, start_screen, orig_scale } => {
                let scale = geom::scale_from_drag(
                    screen_pt.x - start_screen.x,
                    screen_pt.y - start_screen.y,
                    handle,
                    orig_scale,
                );
                self.preview(&id, PartialPinnedItem {
                    scale: Some(scale),
                    ..PartialPinnedItem::default()
                })
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.finish_gesture()
    }

    /// The pointer left the canvas region. Ends a pan in progress; item
    /// gestures are unaffected (drag forgives brief exits, rotate/resize
    /// track the document).
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if matches!(self.gesture, GestureState::Panning { .. }) {
            self.finish_gesture()
        } else {
            Vec::new()
        }
    }

    /// Force-end any active gesture with pointer-up semantics at the last
    /// observed state. Wired to focus loss so a lost pointer-up can never
    /// leave document listeners attached or gesture state dangling.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        if matches!(self.gesture, GestureState::Idle) {
            Vec::new()
        } else {
            self.finish_gesture()
        }
    }

    pub fn on_key_down(&mut self, key: Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => match self.ui.selected_id {
                Some(id) => self.remove_item(&id),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // --- Gesture lifecycle ---

    fn primary_down(&mut self, screen_pt: Point) -> Vec<Action> {
        match hit::hit_test(screen_pt, &self.store, &self.viewport, self.ui.selected_id) {
            Some(Hit { item_id, part: HitPart::Body }) => {
                let Some(item) = self.store.get(&item_id) else {
                    return Vec::new();
                };
                self.ui.selected_id = Some(item_id);
                self.gesture = GestureState::Dragging {
                    id: item_id,
                    start_board: self.viewport.screen_to_board(screen_pt),
                    orig_x: item.x,
                    orig_y: item.y,
                };
                vec![Action::RenderNeeded]
            }
            Some(Hit { item_id, part: HitPart::RotateHandle }) => {
                let Some(item) = self.store.get(&item_id) else {
                    return Vec::new();
                };
                let center = self.viewport.board_to_screen(Point::new(item.x, item.y));
                self.gesture = GestureState::Rotating {
                    id: item_id,
                    center_screen: center,
                    start_angle: geom::angle_of(screen_pt, center),
                    orig_rotation: item.rotation,
                };
                self.ui.raised_id = Some(item_id);
                vec![Action::CaptureDocument, Action::RenderNeeded]
            }
            Some(Hit { item_id, part: HitPart::ResizeHandle(handle) }) => {
                let Some(item) = self.store.get(&item_id) else {
                    return Vec::new();
                };
                self.gesture = GestureState::Resizing {
                    id: item_id,
                    handle,
                    start_screen: screen_pt,
                    orig_scale: item.scale,
                };
                self.ui.raised_id = Some(item_id);
                vec![Action::CaptureDocument, Action::RenderNeeded]
            }
            None => {
                let mut actions = Vec::new();
                if self.ui.selected_id.take().is_some() {
                    actions.push(Action::RenderNeeded);
                }
                self.begin_pan(screen_pt);
                actions.push(Action::SetCursor("grabbing".into()));
                actions
            }
        }
    }

    fn begin_pan(&mut self, screen_pt: Point) {
        self.gesture = GestureState::Panning {
            start_screen: screen_pt,
            start_scroll: Point::new(self.viewport.scroll_x, self.viewport.scroll_y),
        };
    }

    /// Live-preview a gesture mutation. An item deleted mid-gesture makes
    /// this a no-op rather than a fault.
    fn preview(&mut self, id: &ItemId, fields: PartialPinnedItem) -> Vec<Action> {
        if self.store.apply_partial(id, &fields) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Tear down the active gesture, emitting the final commit for item
    /// gestures and the capture release for document-scoped ones.
    fn finish_gesture(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => {}
            GestureState::Panning { .. } => {
                // Scroll offset is viewport state; nothing to commit.
                actions.push(Action::SetCursor("default".into()));
                actions.push(Action::RenderNeeded);
            }
            GestureState::Dragging { id, orig_x, orig_y, .. } => {
                if let Some(item) = self.store.get(&id) {
                    if changed(item.x, orig_x) || changed(item.y, orig_y) {
                        debug!("drag committed: {id}");
                        actions.push(Action::ItemUpdated {
                            id,
                            fields: PartialPinnedItem {
                                x: Some(item.x),
                                y: Some(item.y),
                                ..PartialPinnedItem::default()
                            },
                        });
                    }
                }
                actions.push(Action::RenderNeeded);
            }
            GestureState::Rotating { id, orig_rotation, .. } => {
                self.ui.raised_id = None;
                if let Some(item) = self.store.get(&id) {
                    if changed(item.rotation, orig_rotation) {
                        debug!("rotation committed: {id}");
                        actions.push(Action::ItemUpdated {
                            id,
                            fields: PartialPinnedItem {
                                rotation: Some(item.rotation),
                                ..PartialPinnedItem::default()
                            },
                        });
                    }
                }
                actions.push(Action::ReleaseDocument);
                actions.push(Action::RenderNeeded);
            }
            GestureState::Resizing { id, orig_scale, .. } => {
                self.ui.raised_id = None;
                if let Some(item) = self.store.get(&id) {
                    if changed(item.scale, orig_scale) {
                        debug!("resize committed: {id}");
                        actions.push(Action::ItemUpdated {
                            id,
                            fields: PartialPinnedItem {
                                scale: Some(item.scale),
                                ..PartialPinnedItem::default()
                            },
                        });
                    }
                }
                actions.push(Action::ReleaseDocument);
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }
}

fn changed(a: f64, b: f64) -> bool {
    (a - b).abs() > f64::EPSILON
}
