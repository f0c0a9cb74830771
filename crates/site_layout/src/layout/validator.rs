//! Placement legality of a candidate rectangle against the site and the buildings
//! accepted so far.
use std::fmt;

use crate::geometry::{squared_gap_distance, Rect};
use crate::site::{PlacedBuilding, SiteConfig};

/// First constraint a rejected candidate violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Some edge falls outside the site interior after the setback.
    Bounds,
    /// The candidate intersects the plaza.
    Plaza,
    /// The candidate is closer than `min_distance` to the building at this index.
    Separation { conflicting: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Bounds => f.write_str("outside setback bounds"),
            Rejection::Plaza => f.write_str("intersects plaza"),
            Rejection::Separation { conflicting } => {
                write!(f, "too close to building #{conflicting}")
            }
        }
    }
}

/// Checks bounds, plaza and separation in that order and reports the first failure.
pub fn check_candidate(
    candidate: &Rect,
    placed: &[PlacedBuilding],
    config: &SiteConfig,
) -> Result<(), Rejection> {
    let (min, max) = config.interior();
    if !candidate.lies_within(min, max) {
        return Err(Rejection::Bounds);
    }

    if candidate.intersects(&config.plaza) {
        return Err(Rejection::Plaza);
    }

    let min_distance_sq = config.min_distance_sq();
    if let Some(conflicting) = placed
        .iter()
        .position(|b| squared_gap_distance(candidate, &b.rect) < min_distance_sq)
    {
        return Err(Rejection::Separation { conflicting });
    }

    Ok(())
}

/// Whether `candidate` may be placed next to the already accepted buildings.
#[inline]
pub fn is_valid(candidate: &Rect, placed: &[PlacedBuilding], config: &SiteConfig) -> bool {
    check_candidate(candidate, placed, config).is_ok()
}
