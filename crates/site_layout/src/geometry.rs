//! Axis-aligned rectangles and the gap metric between them.
//!
//! Coordinates follow screen conventions: `(x, y)` is the top-left corner and `y`
//! grows downwards, so `bottom()` is `y + h`.
use glam::Vec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and its size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from a position and a size given as mint vectors.
    pub fn from_position_size(position: Vector2<f32>, size: Vector2<f32>) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Geometric area `w * h`.
    #[inline]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Strict intersection test. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }

    /// Whether the rectangle lies entirely inside the closed box `[min, max]`.
    #[inline]
    pub fn lies_within(&self, min: Vec2, max: Vec2) -> bool {
        self.x >= min.x && self.y >= min.y && self.right() <= max.x && self.bottom() <= max.y
    }
}

/// Squared Euclidean distance between the closest boundary points of two rectangles.
///
/// Zero whenever the rectangles overlap or touch; it only grows once a real empty
/// gap separates them. Symmetric in its arguments.
#[inline]
pub fn squared_gap_distance(r1: &Rect, r2: &Rect) -> f32 {
    let dx = (r1.x - r2.right()).max(r2.x - r1.right()).max(0.0);
    let dy = (r1.y - r2.bottom()).max(r2.y - r1.bottom()).max(0.0);
    dx * dx + dy * dy
}
