/*!
 * Spell-check stage: flags words unknown to the configured dictionary.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app_config::IgnoreSet;
use crate::dictionary::Dictionary;
use crate::subtitle_processor::SubtitleEntry;

// @const: Word tokens, alphabetic runs with an optional internal apostrophe
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z]+(?:'[a-zA-Z]+)?").unwrap()
});

/// Maximum number of suggested corrections per issue
pub const MAX_SUGGESTIONS: usize = 3;

/// A word not found in the dictionary
#[derive(Debug, Clone, Serialize)]
pub struct SpellingIssue {
    /// Index of the entry containing the word
    pub entry_index: usize,
    /// Entry text with line breaks flattened to spaces
    pub text: String,
    /// Character position where the word starts
    pub position: usize,
    /// The unknown word, as written
    pub word: String,
    /// Suggested corrections, best first (may be empty)
    pub suggestions: Vec<String>,
}

// Short tokens and short all-caps tokens are skipped: two-letter words are
// near-universally valid and short uppercase runs are usually acronyms.
fn is_skippable(word: &str) -> bool {
    let len = word.chars().count();
    if len <= 2 {
        return true;
    }
    let is_upper = word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
    is_upper && len <= 4
}

/// Check entry texts against the dictionary.
///
/// Tokens are alphabetic runs with an optional internal apostrophe. Tokens in
/// the ignore set are skipped case-insensitively. Lookup is by lowercase
/// form; unknown words are reported with up to [`MAX_SUGGESTIONS`]
/// suggestions.
pub fn check(
    entries: &[SubtitleEntry],
    dictionary: &dyn Dictionary,
    ignore: Option<&IgnoreSet>,
) -> Vec<SpellingIssue> {
    let mut issues = Vec::new();

    for entry in entries {
        for m in WORD_REGEX.find_iter(&entry.text) {
            let word = m.as_str();
            if is_skippable(word) {
                continue;
            }
            if ignore.is_some_and(|set| set.contains_word(word)) {
                continue;
            }

            let lower = word.to_lowercase();
            if dictionary.contains(&lower) {
                continue;
            }

            issues.push(SpellingIssue {
                entry_index: entry.index,
                text: entry.flat_text(),
                position: entry.text[..m.start()].chars().count(),
                word: word.to_string(),
                suggestions: dictionary.suggest(&lower, MAX_SUGGESTIONS),
            });
        }
    }

    issues
}
