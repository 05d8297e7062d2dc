//! Zone grammar definitions and registry
//!
//! A grammar is an immutable, declarative description of how one zone's raw
//! cell text maps onto canonical fields: the well-name pattern family, the
//! ordered summary section markers, the rig-name normalization steps, and
//! the batch sort policy. The registry compiles one grammar per supported
//! zone from an [`EngineConfig`](crate::config::EngineConfig), so adding a
//! zone means adding a grammar entry, not new branching code.

pub mod registry;
pub mod zone_grammar;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use registry::GrammarRegistry;
pub use zone_grammar::{
    PrefixGapCollapse, RigNameRule, SectionMarker, SectionSlot, SummaryRule, WellNameRule,
    ZoneGrammar,
};
