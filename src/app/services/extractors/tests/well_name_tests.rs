//! Tests for the well-name splitter

use super::grammar_for;
use crate::app::models::{WellNameParts, ZoneTag};
use crate::app::services::extractors::split_well_name;

mod zone_1 {
    use super::*;

    #[test]
    fn test_splits_on_first_slash() {
        let grammar = grammar_for(ZoneTag::Zone1);
        let result = split_well_name("RNT-DZ51/P-475", &grammar);
        assert!(!result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("RNT-DZ51", "P-475"));
    }

    #[test]
    fn test_only_first_slash_delimits() {
        let grammar = grammar_for(ZoneTag::Zone1);
        let result = split_well_name("A/B/C", &grammar);
        assert_eq!(*result.value(), WellNameParts::new("A", "B/C"));
    }

    #[test]
    fn test_no_slash_leaves_secondary_empty() {
        let grammar = grammar_for(ZoneTag::Zone1);
        let result = split_well_name("RNT-DZ51", &grammar);
        assert_eq!(*result.value(), WellNameParts::new("RNT-DZ51", ""));
    }

    #[test]
    fn test_reconstruction_modulo_whitespace() {
        let grammar = grammar_for(ZoneTag::Zone1);
        let result = split_well_name("  RNT-DZ51 / P-475 ", &grammar);
        let parts = result.into_value();
        assert_eq!(format!("{}/{}", parts.primary, parts.secondary), "RNT-DZ51/P-475");
    }
}

mod zone_23 {
    use super::*;

    #[test]
    fn test_three_part_pattern_discards_part_one() {
        let grammar = grammar_for(ZoneTag::Zone23);
        let result = split_well_name("Benggala Utara\n(BGU-01)\n(BGU-A1)", &grammar);
        assert!(!result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("BGU-01", "BGU-A1"));
    }

    #[test]
    fn test_two_part_pattern_promotes_part_two() {
        // Concrete scenario: one parenthetical only
        let grammar = grammar_for(ZoneTag::Zone23);
        let result = split_well_name("Main\n(ABC)", &grammar);
        assert!(!result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("ABC", "ABC"));
    }

    #[test]
    fn test_pattern_miss_promotes_whole_string() {
        let grammar = grammar_for(ZoneTag::Zone23);
        let result = split_well_name("BARE-NAME-77", &grammar);
        assert!(result.is_fallback());
        assert_eq!(
            *result.value(),
            WellNameParts::new("BARE-NAME-77", "BARE-NAME-77")
        );
    }

    #[test]
    fn test_empty_parenthetical_promotes_part_one() {
        let grammar = grammar_for(ZoneTag::Zone23);
        let result = split_well_name("Main Well\n()", &grammar);
        assert_eq!(
            *result.value(),
            WellNameParts::new("Main Well", "Main Well")
        );
    }

    #[test]
    fn test_empty_input_yields_empty_fields() {
        let grammar = grammar_for(ZoneTag::Zone23);
        let result = split_well_name("   ", &grammar);
        assert_eq!(*result.value(), WellNameParts::default());
    }
}

mod zone_4 {
    use super::*;

    #[test]
    fn test_inline_parens_split() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO-P18 (KSO-P18A)", &grammar);
        assert!(!result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("KSO-P18", "KSO-P18A"));
    }

    #[test]
    fn test_empty_parenthetical_copies_primary() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO-P18 ()", &grammar);
        assert_eq!(*result.value(), WellNameParts::new("KSO-P18", "KSO-P18"));
    }

    #[test]
    fn test_pattern_miss_copies_whole_string() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO-P18", &grammar);
        assert!(result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("KSO-P18", "KSO-P18"));
    }

    #[test]
    fn test_zero_width_characters_are_stripped() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO\u{2060}-P18 (KSO-P18A\u{200B})", &grammar);
        assert_eq!(*result.value(), WellNameParts::new("KSO-P18", "KSO-P18A"));
    }

    #[test]
    fn test_newline_before_parenthetical_is_whitespace() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO-P18\n(KSO-P18A)", &grammar);
        assert!(!result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("KSO-P18", "KSO-P18A"));
    }

    #[test]
    fn test_embedded_newline_in_name_falls_back() {
        let grammar = grammar_for(ZoneTag::Zone4);
        let result = split_well_name("KSO\nP18 (A)", &grammar);
        assert!(result.is_fallback());
        assert_eq!(*result.value(), WellNameParts::new("KSO\nP18 (A)", "KSO\nP18 (A)"));
    }
}
