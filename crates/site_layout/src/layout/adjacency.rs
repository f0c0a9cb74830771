//! Post-hoc adjacency rule: every building of one type needs a building of another type
//! within a radius.
//!
//! The check runs on a finished layout and only reports a verdict. It never influences
//! which candidates the sampler accepts.
use crate::geometry::squared_gap_distance;
use crate::site::{PlacedBuilding, TYPE_A, TYPE_B};

/// Whether every `"A"` building has a `"B"` building within `neighbor_distance`.
///
/// Holds vacuously when there is no `"A"` building.
pub fn check_neighbor_rule(buildings: &[PlacedBuilding], neighbor_distance: f32) -> bool {
    check_adjacency(buildings, TYPE_A, TYPE_B, neighbor_distance)
}

/// Whether every `subject` building has at least one `neighbor` building whose gap
/// distance is at most `distance`.
pub fn check_adjacency(
    buildings: &[PlacedBuilding],
    subject: &str,
    neighbor: &str,
    distance: f32,
) -> bool {
    unmatched_subjects(buildings, subject, neighbor, distance).is_empty()
}

/// Indices of `subject` buildings without any `neighbor` building within `distance`.
pub fn unmatched_subjects(
    buildings: &[PlacedBuilding],
    subject: &str,
    neighbor: &str,
    distance: f32,
) -> Vec<usize> {
    let distance_sq = distance * distance;
    let neighbors: Vec<&PlacedBuilding> = buildings.iter().filter(|b| b.is(neighbor)).collect();

    buildings
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is(subject))
        .filter(|(_, s)| {
            !neighbors
                .iter()
                .any(|n| squared_gap_distance(&s.rect, &n.rect) <= distance_sq)
        })
        .map(|(i, _)| i)
        .collect()
}
