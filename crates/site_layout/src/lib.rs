#![forbid(unsafe_code)]
//! site_layout: Rejection-sampling placement of rectangular building footprints on a site.
//!
//! Modules:
//! - geometry: axis-aligned rectangles and the squared gap distance between them
//! - site: footprint templates, site configuration and placed buildings
//! - sampling: uniform draws over an injected RNG, weighted footprint selection
//! - layout: candidate validation, the sampling runner, events and the adjacency rule
//! - report: counts, areas and PASS/FAIL rule indicators for a finished layout
//!
//! For examples, see the `site_layout_examples` crate.
pub mod error;
pub mod geometry;
pub mod layout;
pub mod report;
pub mod sampling;
pub mod site;

/// Convenient re-exports for common types. Import with `use site_layout::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{squared_gap_distance, Rect};
    pub use crate::layout::events::{
        EventSink, FnSink, LayoutEvent, LayoutEventKind, MultiSink, VecSink,
    };
    pub use crate::layout::{
        check_adjacency, check_candidate, check_neighbor_rule, generate, generate_with_events,
        is_valid, unmatched_subjects, LayoutRun, LayoutRunner, Rejection,
    };
    pub use crate::report::{verify_layout, LayoutReport, LayoutSummary, RuleStatus};
    pub use crate::site::{
        Footprint, FootprintId, FootprintStyle, PlacedBuilding, SiteConfig, TYPE_A, TYPE_B,
    };
}
