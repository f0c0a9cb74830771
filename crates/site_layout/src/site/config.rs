//! Site configuration shared read-only by every stage of a layout run.
use std::collections::HashSet;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::site::footprint::{Footprint, FootprintStyle};
use crate::site::{TYPE_A, TYPE_B};

/// Description of the site and the placement policy for one generation run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteConfig {
    /// Site width in site units.
    pub width: f32,
    /// Site height in site units.
    pub height: f32,
    /// Exclusion zone no building may intersect.
    pub plaza: Rect,
    /// Minimum empty margin between the site boundary and any building.
    pub setback: f32,
    /// Minimum gap distance between any two buildings.
    pub min_distance: f32,
    /// Radius used by the adjacency rule.
    pub neighbor_distance: f32,
    /// Number of buildings the sampler tries to place.
    pub target_count: usize,
    /// Upper bound on sampling attempts per run.
    pub max_attempts: usize,
    /// Footprint templates in selection order.
    pub footprints: Vec<Footprint>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 140.0,
            plaza: Rect::new(80.0, 50.0, 40.0, 40.0),
            setback: 10.0,
            min_distance: 15.0,
            neighbor_distance: 60.0,
            target_count: 50,
            max_attempts: 3000,
            // B first: a uniform draw u picks B for u <= 0.4 and A otherwise.
            footprints: vec![
                Footprint::new(TYPE_B, 20.0, 20.0, 400.0)
                    .with_weight(0.4)
                    .with_style(FootprintStyle::new([22, 163, 74], TYPE_B)),
                Footprint::new(TYPE_A, 30.0, 20.0, 600.0)
                    .with_weight(0.6)
                    .with_style(FootprintStyle::new([37, 99, 235], TYPE_A)),
            ],
        }
    }
}

impl SiteConfig {
    /// Creates a site of the given size with no plaza, no setback and no footprints.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            plaza: Rect::default(),
            setback: 0.0,
            min_distance: 0.0,
            neighbor_distance: 0.0,
            target_count: 0,
            max_attempts: 0,
            footprints: Vec::new(),
        }
    }

    /// Sets the site width and height.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the exclusion zone.
    pub fn with_plaza(mut self, plaza: Rect) -> Self {
        self.plaza = plaza;
        self
    }

    /// Sets the setback margin.
    pub fn with_setback(mut self, setback: f32) -> Self {
        self.setback = setback;
        self
    }

    /// Sets the minimum separation distance.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Sets the adjacency radius.
    pub fn with_neighbor_distance(mut self, neighbor_distance: f32) -> Self {
        self.neighbor_distance = neighbor_distance;
        self
    }

    /// Sets the target building count.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Appends a footprint template.
    pub fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprints.push(footprint);
        self
    }

    /// Replaces all footprint templates.
    pub fn with_footprints(mut self, footprints: Vec<Footprint>) -> Self {
        self.footprints = footprints;
        self
    }

    /// Changes the selection weight of an existing footprint.
    pub fn with_footprint_weight(mut self, id: &str, weight: f32) -> Result<Self> {
        let footprint = self
            .footprints
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::UnknownFootprint { id: id.to_owned() })?;
        footprint.weight = weight;
        Ok(self)
    }

    /// Looks up a footprint template by id.
    pub fn footprint(&self, id: &str) -> Option<&Footprint> {
        self.footprints.iter().find(|f| f.id == id)
    }

    /// Sum of all footprint selection weights.
    pub fn total_weight(&self) -> f32 {
        self.footprints.iter().map(|f| f.weight).sum()
    }

    #[inline]
    pub fn min_distance_sq(&self) -> f32 {
        self.min_distance * self.min_distance
    }

    /// Top-left and bottom-right corners of the buildable interior after the setback.
    #[inline]
    pub fn interior(&self) -> (Vec2, Vec2) {
        (
            Vec2::splat(self.setback),
            Vec2::new(self.width - self.setback, self.height - self.setback),
        )
    }

    /// Validates the configuration, returning an error if it is structurally invalid.
    ///
    /// A configuration that passes may still be too dense to reach `target_count`; that is
    /// reported by the run, not here.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "site width and height must be finite and > 0".into(),
            ));
        }
        for (name, value) in [
            ("setback", self.setback),
            ("min_distance", self.min_distance),
            ("neighbor_distance", self.neighbor_distance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        let plaza = &self.plaza;
        if ![plaza.x, plaza.y, plaza.w, plaza.h]
            .iter()
            .all(|v| v.is_finite())
            || plaza.w < 0.0
            || plaza.h < 0.0
        {
            return Err(Error::InvalidConfig(
                "plaza must be finite with non-negative size".into(),
            ));
        }
        if self.footprints.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one footprint is required".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.footprints.len());
        for f in &self.footprints {
            if !seen.insert(f.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate footprint id '{}'",
                    f.id
                )));
            }
            if !(f.w.is_finite() && f.h.is_finite()) || f.w <= 0.0 || f.h <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "footprint '{}' must have finite size > 0",
                    f.id
                )));
            }
            if !f.weight.is_finite() || f.weight < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "footprint '{}' weight must be finite and >= 0",
                    f.id
                )));
            }
        }
        if self.total_weight() <= 0.0 {
            return Err(Error::InvalidConfig(
                "footprint weights must sum to > 0".into(),
            ));
        }

        Ok(())
    }
}
