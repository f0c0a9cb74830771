//! Random draws used by the placement sampler.
//!
//! All randomness flows through an injected [`RngCore`], so a seeded generator or a
//! scripted test double replays the exact same layout.
use glam::Vec2;
use rand::RngCore;

use crate::site::{Footprint, SiteConfig};

/// Generate a random float in the range [0, 1].
///
/// The upper bound is closed: `next_u32` values within 128 of `u32::MAX` round to exactly
/// `1.0` in `f32`. Position draws treat `[0, width - w]` as closed anyway, and anything
/// past the setback is rejected by the validator.
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Picks a footprint proportionally to its weight with one uniform draw.
///
/// Footprints are walked in declaration order; the first one whose cumulative weight
/// reaches `u * total_weight` wins. Returns `None` without drawing when no footprint has
/// a positive weight.
pub fn pick_footprint<'a>(
    footprints: &'a [Footprint],
    rng: &mut dyn RngCore,
) -> Option<&'a Footprint> {
    let total_weight: f32 = footprints
        .iter()
        .filter(|f| f.weight > 0.0)
        .map(|f| f.weight)
        .sum();
    if total_weight <= 0.0 {
        return None;
    }

    let mut roll = rand01(rng) * total_weight;
    for f in footprints.iter().filter(|f| f.weight > 0.0) {
        roll -= f.weight;
        if roll <= 0.0 {
            return Some(f);
        }
    }

    // Rounding residue when the draw lands at the very top of the range.
    footprints.iter().rev().find(|f| f.weight > 0.0)
}

/// Draws the top-left corner of a candidate uniformly from
/// `[0, width - w] × [0, height - h]`, x first.
///
/// The range ignores setback and plaza; those are left to the validator.
#[inline]
pub fn draw_position(footprint: &Footprint, config: &SiteConfig, rng: &mut dyn RngCore) -> Vec2 {
    let x = rand01(rng) * (config.width - footprint.w);
    let y = rand01(rng) * (config.height - footprint.h);
    Vec2::new(x, y)
}
