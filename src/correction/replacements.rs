/*!
 * Replacement stage: ordered literal substring replacements over raw SRT text.
 */

use log::debug;

use crate::app_config::ReplacementRule;

/// Result of the replacement stage
#[derive(Debug, Clone)]
pub struct ReplacementOutcome {
    /// Text after all rules were applied
    pub text: String,
    /// Total occurrences replaced, summed over rules
    pub replacements_made: usize,
    /// Whether any rule changed the text
    pub modified: bool,
}

/// Apply replacement rules to the whole file text, in order.
///
/// Rules are applied sequentially, so later rules see the output of earlier
/// ones. The count for each rule equals the occurrences present before that
/// rule's substitution.
pub fn apply(raw_text: &str, rules: &[ReplacementRule]) -> ReplacementOutcome {
    let mut text = raw_text.to_string();
    let mut replacements_made = 0;

    for rule in rules {
        let count = text.matches(&rule.from).count();
        if count > 0 {
            text = text.replace(&rule.from, &rule.to);
            replacements_made += count;
            debug!(
                "Replaced {} occurrence(s) of {:?} with {:?}",
                count, rule.from, rule.to
            );
        }
    }

    ReplacementOutcome {
        modified: replacements_made > 0,
        text,
        replacements_made,
    }
}
