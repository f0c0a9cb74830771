//! Site description: footprint templates, the site configuration and placed buildings.
pub mod building;
pub mod config;
pub mod footprint;

pub use building::PlacedBuilding;
pub use config::SiteConfig;
pub use footprint::{Footprint, FootprintId, FootprintStyle};

/// Footprint id of the tower type that must have a neighbor of [`TYPE_B`].
pub const TYPE_A: &str = "A";
/// Footprint id of the type that serves as neighbor for [`TYPE_A`].
pub const TYPE_B: &str = "B";
