//! Buildings accepted by the sampler.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::site::footprint::{Footprint, FootprintId};

/// A building placed on the site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBuilding {
    /// Footprint id of this building.
    pub footprint: FootprintId,
    /// Occupied rectangle in site coordinates.
    pub rect: Rect,
    /// Nominal area copied from the footprint at placement time.
    pub area: f32,
}

impl PlacedBuilding {
    /// Place `footprint` with its top-left corner at `(x, y)`.
    pub fn new(footprint: &Footprint, x: f32, y: f32) -> Self {
        Self {
            footprint: footprint.id.clone(),
            rect: footprint.rect_at(x, y),
            area: footprint.area,
        }
    }

    #[inline]
    pub fn is(&self, footprint_id: &str) -> bool {
        self.footprint == footprint_id
    }
}

