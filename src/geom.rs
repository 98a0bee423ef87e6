//! Pure gesture math: pointer angles, rotation deltas, and corner-drag
//! scaling. No state; degenerate inputs resolve to zero-delta results
//! rather than faults so nothing bad ever reaches the render path.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::camera::Point;
use crate::consts::{RESIZE_SENSITIVITY, SCALE_MAX, SCALE_MIN};
use crate::input::CornerHandle;

/// Angle of `pointer` around `center`, in radians.
///
/// A degenerate pair (pointer exactly at the center) yields `0.0`, which
/// downstream turns into a zero rotation delta.
#[must_use]
pub fn angle_of(pointer: Point, center: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Incremental rotation in degrees between two pointer angles, added to the
/// rotation captured at gesture start.
#[must_use]
pub fn rotation_delta(start_angle: f64, current_angle: f64) -> f64 {
    (current_angle - start_angle).to_degrees()
}

/// Scale resulting from dragging a corner handle `(dx, dy)` screen pixels
/// from its gesture-start position.
///
/// The growth sign is keyed on the horizontal axis — left-side corners
/// invert it, so dragging outward grows and inward shrinks regardless of
/// which corner started the gesture. Magnitude is the dominant-axis
/// distance, not Euclidean, to match the feel of a diagonal corner drag.
/// A pure-vertical drag carries no horizontal sign and leaves the scale
/// unchanged. The result is always within the scale bounds.
#[must_use]
pub fn scale_from_drag(dx: f64, dy: f64, handle: CornerHandle, start_scale: f64) -> f64 {
    let outward = if handle.is_left() { -dx } else { dx };
    let magnitude = dx.abs().max(dy.abs());
    let growth = if outward > 0.0 {
        magnitude
    } else if outward < 0.0 {
        -magnitude
    } else {
        0.0
    };
    clamp_scale(start_scale * (1.0 + growth * RESIZE_SENSITIVITY))
}

/// Clamp a scale into the allowed range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(SCALE_MIN, SCALE_MAX)
}
