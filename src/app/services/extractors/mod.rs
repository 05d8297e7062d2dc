//! Field extraction primitives
//!
//! Reusable, pure extractors that turn one raw cell value into discrete
//! canonical fields under a zone grammar:
//! - [`well_name`] - compound well-identifier splitting
//! - [`summary`] - narrative section splitting on ordered keywords
//! - [`rig_name`] - rig display-name normalization
//!
//! Extractors never fail: a pattern miss degrades into the grammar's
//! documented fallback, tagged as such in the returned
//! [`Extraction`](crate::app::models::Extraction).

pub mod rig_name;
pub mod summary;
pub mod well_name;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use rig_name::normalize_rig_name;
pub use summary::split_summary;
pub use well_name::split_well_name;
