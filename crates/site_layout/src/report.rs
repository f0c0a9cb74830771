//! Summary statistics and rule indicators for a finished layout.
//!
//! Everything here is computed after the run from the building sequence alone; the
//! engine does not depend on it.
use std::fmt;

use crate::geometry::squared_gap_distance;
use crate::layout::adjacency::check_neighbor_rule;
use crate::site::{FootprintId, PlacedBuilding, SiteConfig};

/// Counts and areas of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// Building count per footprint, in configuration order.
    pub counts: Vec<(FootprintId, usize)>,
    /// Sum of the nominal areas of all buildings.
    pub total_area: f32,
    /// Number of buildings placed.
    pub placed: usize,
    /// Number of buildings requested.
    pub target_count: usize,
}

impl LayoutSummary {
    pub fn new(config: &SiteConfig, buildings: &[PlacedBuilding]) -> Self {
        let counts = config
            .footprints
            .iter()
            .map(|f| (f.id.clone(), buildings.iter().filter(|b| b.is(&f.id)).count()))
            .collect();
        Self {
            counts,
            total_area: buildings.iter().map(|b| b.area).sum(),
            placed: buildings.len(),
            target_count: config.target_count,
        }
    }

    /// Number of buildings of the given footprint.
    pub fn count(&self, footprint_id: &str) -> usize {
        self.counts
            .iter()
            .find(|(id, _)| id == footprint_id)
            .map_or(0, |(_, n)| *n)
    }

    /// Whether the target count was reached.
    pub fn fully_placed(&self) -> bool {
        self.placed >= self.target_count
    }
}

impl fmt::Display for LayoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, n) in &self.counts {
            writeln!(f, "{id:>12}: {n}")?;
        }
        writeln!(f, "{:>12}: {:.0}", "total area", self.total_area)?;
        write!(f, "{:>12}: {}/{}", "placed", self.placed, self.target_count)
    }
}

/// Named PASS/FAIL indicator for one layout rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStatus {
    /// Short rule identifier.
    pub name: &'static str,
    /// Human readable rule description.
    pub description: &'static str,
    pub passed: bool,
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{status}] {:<10} {}", self.name, self.description)
    }
}

/// Evaluates the layout rules independently of the engine that produced the layout.
pub fn verify_layout(config: &SiteConfig, buildings: &[PlacedBuilding]) -> Vec<RuleStatus> {
    let (min, max) = config.interior();
    let setback = buildings.iter().all(|b| b.rect.lies_within(min, max));

    let plaza = buildings.iter().all(|b| !b.rect.intersects(&config.plaza));

    let min_distance_sq = config.min_distance_sq();
    let separation = buildings.iter().enumerate().all(|(i, a)| {
        buildings[i + 1..]
            .iter()
            .all(|b| squared_gap_distance(&a.rect, &b.rect) >= min_distance_sq)
    });

    let adjacency = check_neighbor_rule(buildings, config.neighbor_distance);

    vec![
        RuleStatus {
            name: "setback",
            description: "all buildings keep the setback from the site boundary",
            passed: setback,
        },
        RuleStatus {
            name: "plaza",
            description: "no building intersects the plaza",
            passed: plaza,
        },
        RuleStatus {
            name: "separation",
            description: "all buildings keep the minimum distance from each other",
            passed: separation,
        },
        RuleStatus {
            name: "adjacency",
            description: "every A building has a B building within the neighbor distance",
            passed: adjacency,
        },
    ]
}

/// Summary plus rule indicators, ready to be shown to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub summary: LayoutSummary,
    pub rules: Vec<RuleStatus>,
}

impl LayoutReport {
    pub fn new(config: &SiteConfig, buildings: &[PlacedBuilding]) -> Self {
        Self {
            summary: LayoutSummary::new(config, buildings),
            rules: verify_layout(config, buildings),
        }
    }

    /// Looks up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&RuleStatus> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn all_passed(&self) -> bool {
        self.rules.iter().all(|r| r.passed)
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
