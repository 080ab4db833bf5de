//! Pixel geometry for the visual overlay.
//!
//! All coordinates are logical pixels. `Rect` values come from the host's
//! geometry provider and are relative to whatever origin the host uses;
//! `SelectionRect` is always relative to the table surface origin so the
//! overlay renderer can position itself without further translation.

use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

/// The highlight rectangle emitted to the overlay renderer.
///
/// Purely a rendering hint; recomputed from the selection on every change.
/// A hidden rectangle carries zeroed geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub visible: bool,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SelectionRect {
    pub fn hidden() -> Self {
        Self { visible: false, left: 0.0, top: 0.0, width: 0.0, height: 0.0 }
    }

    /// Build the visible rectangle spanning two cell rects, translated so it
    /// is relative to the surface rect's origin.
    pub fn spanning(start: Rect, end: Rect, surface: Rect) -> Self {
        Self {
            visible: true,
            left: start.left - surface.left,
            top: start.top - surface.top,
            width: end.right() - start.left,
            height: end.bottom() - start.top,
        }
    }

    /// Bottom-right corner, in surface-relative pixels (fill handle anchor).
    pub fn corner(&self) -> Point {
        Point::new(self.left + self.width, self.top + self.height)
    }
}

impl Default for SelectionRect {
    fn default() -> Self {
        Self::hidden()
    }
}
