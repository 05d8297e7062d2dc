//! Test utilities for grammar construction and registry lookups

use crate::config::EngineConfig;

// Test modules
mod grammar_tests;

/// Helper to build a registry from the default configuration
pub fn default_registry() -> super::GrammarRegistry {
    super::GrammarRegistry::new(&EngineConfig::default()).unwrap()
}
