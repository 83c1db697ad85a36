/*!
 * Tests for configuration parsing
 */

use srtkit::app_config::{
    parse_replacement_rules, CorrectionConfig, IgnoreSet, ReplacementRule,
};

#[test]
fn test_parseReplacementRules_withValidSpec_shouldPreserveOrder() {
    let rules = parse_replacement_rules("|=I,`='").unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0], ReplacementRule::new("|", "I"));
    assert_eq!(rules[1], ReplacementRule::new("`", "'"));
}

#[test]
fn test_parseReplacementRules_withEmptyValue_shouldMeanDeletion() {
    let rules = parse_replacement_rules("~=").unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].from, "~");
    assert_eq!(rules[0].to, "");
}

#[test]
fn test_parseReplacementRules_withEmptyInput_shouldYieldNoRules() {
    assert!(parse_replacement_rules("").unwrap().is_empty());
    assert!(parse_replacement_rules("   ").unwrap().is_empty());
}

#[test]
fn test_parseReplacementRules_withTrailingComma_shouldSkipEmptySegment() {
    let rules = parse_replacement_rules("|=I,").unwrap();

    assert_eq!(rules.len(), 1);
}

#[test]
fn test_parseReplacementRules_withMissingEquals_shouldReject() {
    assert!(parse_replacement_rules("noequals").is_err());
    assert!(parse_replacement_rules("|=I,bad").is_err());
}

#[test]
fn test_parseReplacementRules_withEmptyKey_shouldReject() {
    assert!(parse_replacement_rules("=x").is_err());
}

#[test]
fn test_parseReplacementRules_withMultiCharKey_shouldAccept() {
    let rules = parse_replacement_rules("...=…").unwrap();

    assert_eq!(rules[0].from, "...");
    assert_eq!(rules[0].to, "…");
}

#[test]
fn test_ignoreSet_parse_shouldTrimAndDropEmpties() {
    let set = IgnoreSet::parse(" Gandalf , Frodo ,™,, ");

    assert!(set.contains_word("Gandalf"));
    assert!(set.contains_word("Frodo"));
    assert!(set.contains_char('™'));
    assert!(!set.is_empty());
}

#[test]
fn test_ignoreSet_words_shouldMatchCaseInsensitively() {
    let set = IgnoreSet::parse("Gandalf");

    assert!(set.contains_word("gandalf"));
    assert!(set.contains_word("GANDALF"));
    assert!(!set.contains_word("Saruman"));
}

#[test]
fn test_ignoreSet_chars_shouldMatchExactly() {
    let set = IgnoreSet::parse("™");

    assert!(set.contains_char('™'));
    assert!(!set.contains_char('€'));
}

#[test]
fn test_ignoreSet_empty_shouldContainNothing() {
    let set = IgnoreSet::parse("");

    assert!(set.is_empty());
    assert!(!set.contains_word("anything"));
    assert!(!set.contains_char('x'));
}

#[test]
fn test_correctionConfig_fromCompact_shouldBuildTypedConfig() {
    let config = CorrectionConfig::from_compact("|=I", "Gandalf,™", "EN").unwrap();

    assert_eq!(config.replacements.len(), 1);
    assert!(config.ignore.contains_word("gandalf"));
    assert_eq!(config.language, "en");
    assert!(config.replacements_enabled);
    assert!(config.spelling_enabled);
}

#[test]
fn test_correctionConfig_fromCompact_withMalformedSpec_shouldFail() {
    assert!(CorrectionConfig::from_compact("broken", "", "en").is_err());
}

#[test]
fn test_correctionConfig_validate_shouldRejectEmptyLanguage() {
    let config = CorrectionConfig {
        language: "  ".to_string(),
        ..Default::default()
    };

    assert!(config.validate().is_err());
    assert!(CorrectionConfig::default().validate().is_ok());
}

#[test]
fn test_correctionConfig_serde_shouldApplyDefaults() {
    let config: CorrectionConfig = serde_json::from_str("{}").unwrap();

    assert!(config.replacements_enabled);
    assert!(config.ignore_enabled);
    assert!(config.charset_scan_enabled);
    assert!(config.spelling_enabled);
    assert!(config.replacements.is_empty());
    assert_eq!(config.language, "en");
}

#[test]
fn test_correctionConfig_serde_shouldRoundTrip() {
    let config = CorrectionConfig {
        replacements: vec![ReplacementRule::new("|", "I")],
        ignore: IgnoreSet::parse("Gandalf"),
        language: "no".to_string(),
        ..Default::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: CorrectionConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.replacements, config.replacements);
    assert_eq!(back.ignore, config.ignore);
    assert_eq!(back.language, "no");
}
