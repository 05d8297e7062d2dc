//! Normalization engine orchestration
//!
//! The engine owns the configuration and the compiled grammar registry and
//! drives the full pipeline: per-zone parsing in the fixed processing order,
//! then merging into the final canonical table. It is a pure, stateless
//! batch transform (one raw-row collection in, one canonical table out)
//! with an optional concurrent path that processes the three zone
//! partitions on separate tasks.

pub mod merger;
pub mod processor;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{NormalizationEngine, NormalizedTable};
