#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::BOARD_EXTENT;

/// A point in either screen or board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport over the fixed-extent board.
///
/// `scroll_x` / `scroll_y` are the board coordinates of the top-left visible
/// corner; `width` / `height` are the visible size in CSS pixels. The board
/// itself never moves — panning adjusts the scroll offset only.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scroll_x: 0.0, scroll_y: 0.0, width: 0.0, height: 0.0 }
    }
}

impl Viewport {
    /// Convert a screen-space point (CSS pixels) to board coordinates.
    #[must_use]
    pub fn screen_to_board(&self, screen: Point) -> Point {
        Point { x: screen.x + self.scroll_x, y: screen.y + self.scroll_y }
    }

    /// Convert a board-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn board_to_screen(&self, board: Point) -> Point {
        Point { x: board.x - self.scroll_x, y: board.y - self.scroll_y }
    }

    /// Board-space point at the center of the visible region.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.scroll_x + self.width * 0.5,
            y: self.scroll_y + self.height * 0.5,
        }
    }

    /// Set the scroll offset, clamped so the viewport stays on the board.
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll_x = x.clamp(0.0, (BOARD_EXTENT - self.width).max(0.0));
        self.scroll_y = y.clamp(0.0, (BOARD_EXTENT - self.height).max(0.0));
    }
}
