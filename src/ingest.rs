//! Image ingestion contract: fit arbitrary sources into the pin frame.
//!
//! The board never stores raw image bytes — an ingestor turns a source image
//! into a displayable reference string, cover-cropped to the fixed 600×400
//! frame. The crop math lives here so native hosts and tests share it.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use crate::consts::{INGEST_FRAME_H, INGEST_FRAME_W};
use crate::error::BoardError;

/// Centered region of a source image whose aspect ratio matches the ingest
/// frame. Scaling this region to 600×400 fills the frame without distortion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the centered cover-crop of a `src_w` × `src_h` source.
///
/// Sources wider than the frame keep full height and crop the sides;
/// taller sources keep full width and crop top and bottom. Degenerate
/// sources (zero or negative dimensions) yield `None`.
#[must_use]
pub fn crop_to_frame(src_w: f64, src_h: f64) -> Option<CropRect> {
    if src_w <= 0.0 || src_h <= 0.0 {
        return None;
    }
    let frame_aspect = INGEST_FRAME_W / INGEST_FRAME_H;
    if src_w / src_h > frame_aspect {
        let width = src_h * frame_aspect;
        Some(CropRect { x: (src_w - width) * 0.5, y: 0.0, width, height: src_h })
    } else {
        let height = src_w / frame_aspect;
        Some(CropRect { x: 0.0, y: (src_h - height) * 0.5, width: src_w, height })
    }
}

/// Collaborator that turns a raw image into a displayable reference string.
pub trait ImageIngestor {
    /// Crop, resize, and publish an image, returning the reference the
    /// board stores as the item's `content`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] when the image cannot be decoded or
    /// published.
    fn ingest(&self, bytes: &[u8]) -> Result<String, BoardError>;
}
