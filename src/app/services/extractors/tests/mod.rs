//! Test utilities for field extractor testing

use crate::app::models::ZoneTag;
use crate::app::services::grammar::ZoneGrammar;
use crate::config::EngineConfig;

mod well_name_tests;

/// Helper to build a zone grammar from the default configuration
pub fn grammar_for(zone: ZoneTag) -> ZoneGrammar {
    ZoneGrammar::for_zone(zone, &EngineConfig::default()).unwrap()
}
