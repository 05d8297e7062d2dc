//! Rig display-name normalization

use crate::app::services::grammar::ZoneGrammar;
use crate::constants::RIG_PREFIX_TOKEN;

/// Normalize a raw rig-name cell into a trimmed display name.
///
/// Steps are grammar-driven: an optional `Rig` prefix strip, an exact-match
/// substitution table for historically inconsistent names, and a
/// whitespace-gap collapse after a fixed prefix. Zones without any of these
/// steps get the raw name back trimmed.
pub fn normalize_rig_name(raw: &str, grammar: &ZoneGrammar) -> String {
    let rule = &grammar.rig_name_rule;
    let mut name = raw.trim().to_string();

    if rule.strip_rig_prefix {
        if let Some(rest) = name.strip_prefix(RIG_PREFIX_TOKEN) {
            name = rest.trim().to_string();
        }
    }

    for (from, to) in &rule.replacements {
        if name == *from {
            name = to.clone();
            break;
        }
    }

    if let Some(gap) = &rule.gap_collapse {
        if name.starts_with(&gap.prefix) {
            name = gap.pattern.replace_all(&name, "${1}").into_owned();
        }
    }

    name
}
