//! Registry mapping zone tags to compiled grammars

use super::zone_grammar::ZoneGrammar;
use crate::app::models::ZoneTag;
use crate::config::EngineConfig;
use crate::Result;

/// Compiled grammar per supported zone.
///
/// Construction validates the configuration and compiles every pattern once;
/// lookups are total because the supported zones are a closed set.
#[derive(Debug, Clone)]
pub struct GrammarRegistry {
    zone_1: ZoneGrammar,
    zone_23: ZoneGrammar,
    zone_4: ZoneGrammar,
}

impl GrammarRegistry {
    /// Compile grammars for every supported zone from the configuration
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            zone_1: ZoneGrammar::for_zone(ZoneTag::Zone1, config)?,
            zone_23: ZoneGrammar::for_zone(ZoneTag::Zone23, config)?,
            zone_4: ZoneGrammar::for_zone(ZoneTag::Zone4, config)?,
        })
    }

    /// Get the grammar for a zone
    pub fn get(&self, zone: ZoneTag) -> &ZoneGrammar {
        match zone {
            ZoneTag::Zone1 => &self.zone_1,
            ZoneTag::Zone23 => &self.zone_23,
            ZoneTag::Zone4 => &self.zone_4,
        }
    }
}
