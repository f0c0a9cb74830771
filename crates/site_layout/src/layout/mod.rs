//! Layout engine: candidate validation, rejection sampling and the adjacency check.
pub mod adjacency;
pub mod events;
pub mod runner;
pub mod validator;

pub use adjacency::{check_adjacency, check_neighbor_rule, unmatched_subjects};
pub use runner::{generate, generate_with_events, LayoutRun, LayoutRunner};
pub use validator::{check_candidate, is_valid, Rejection};
