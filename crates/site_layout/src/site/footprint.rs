//! Footprint templates for building types.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

pub type FootprintId = String;

/// Display metadata for a footprint type. Not used by the engine itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintStyle {
    /// Fill color as RGB.
    pub color: [u8; 3],
    /// Short display label for renderers and reports. Defaults to the footprint id.
    pub label: String,
}

impl FootprintStyle {
    pub fn new(color: [u8; 3], label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// Rectangular template shared by every building of one type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// Type tag, e.g. `"A"`.
    pub id: FootprintId,
    /// Width in site units.
    pub w: f32,
    /// Height in site units.
    pub h: f32,
    /// Nominal floor area reported for each building of this type.
    ///
    /// Copied onto placements as-is and never derived from `w * h`.
    pub area: f32,
    /// Relative selection weight used when drawing the type of a candidate.
    pub weight: f32,
    /// Display metadata.
    pub style: FootprintStyle,
}

impl Footprint {
    /// Create a footprint with weight 1.0 and a style labelled by the id.
    pub fn new(id: impl Into<FootprintId>, w: f32, h: f32, area: f32) -> Self {
        let id = id.into();
        Self {
            style: FootprintStyle::new([128, 128, 128], id.clone()),
            id,
            w,
            h,
            area,
            weight: 1.0,
        }
    }

    /// Set the selection weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the display style.
    pub fn with_style(mut self, style: FootprintStyle) -> Self {
        self.style = style;
        self
    }

    /// Rectangle of this footprint with its top-left corner at `(x, y)`.
    #[inline]
    pub fn rect_at(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.w, self.h)
    }
}
