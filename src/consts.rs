//! Shared numeric constants for the pinboard crate.

// ── Item transform bounds ───────────────────────────────────────

/// Minimum uniform item scale.
pub const SCALE_MIN: f64 = 0.5;

/// Maximum uniform item scale.
pub const SCALE_MAX: f64 = 3.0;

/// Drag-distance-to-scale-growth factor. Tuned so typical corner drags
/// (tens to low hundreds of pixels) sweep the full scale range.
pub const RESIZE_SENSITIVITY: f64 = 0.003;

// ── Board geometry ──────────────────────────────────────────────

/// Side length of the board surface in board units. Large enough that items
/// never run out of room; panning moves the viewport, not the items.
pub const BOARD_EXTENT: f64 = 24_000.0;

/// Untransformed side length of an item (board units == CSS pixels at scale 1).
pub const ITEM_BASE_SIZE: f64 = 256.0;

// ── Item spawning ───────────────────────────────────────────────

/// Maximum random offset from the viewport center for new items, per axis.
pub const SPAWN_JITTER: f64 = 150.0;

/// Maximum random initial tilt for new items, degrees.
pub const SPAWN_TILT_DEG: f64 = 3.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for corner and rotate handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the item's top edge midpoint to the rotate handle, in
/// screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Stacking ────────────────────────────────────────────────────

/// z-index boost for the item with an active rotate or resize gesture, so
/// its handles stay reachable above sibling items.
pub const RAISED_Z: i64 = 1_000_000;

// ── Image ingestion ─────────────────────────────────────────────

/// Width of the target frame for ingested images, CSS pixels.
pub const INGEST_FRAME_W: f64 = 600.0;

/// Height of the target frame for ingested images, CSS pixels.
pub const INGEST_FRAME_H: f64 = 400.0;
