/*!
 * Dictionary seam for the spell-check stage.
 *
 * The crate ships no dictionary data: callers supply word lists (or their own
 * `Dictionary` implementation) and the pipeline only queries membership and
 * suggestions through this trait.
 */

use std::collections::HashSet;

use log::debug;

use crate::similarity;

/// Maximum edit distance considered when ranking suggestions
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A spell-checking dictionary keyed by lowercase words
pub trait Dictionary {
    /// Dictionary identifier, e.g. `"en"`
    fn identifier(&self) -> &str;

    /// Whether the lowercase word is known
    fn contains(&self, word: &str) -> bool;

    /// Up to `limit` suggested corrections for an unknown word, best first
    fn suggest(&self, word: &str, limit: usize) -> Vec<String>;
}

/// Map a subtitle language code to the identifier of the dictionary to load.
///
/// Only a small fixed set of codes has a direct dictionary. Norwegian has
/// none, so it falls back to German; anything unrecognized falls back to
/// English.
pub fn dictionary_language_for(code: &str) -> &'static str {
    match code.trim().to_lowercase().as_str() {
        "en" => "en",
        "no" => "de",
        other => {
            if let Some(lang) = isolang::Language::from_639_1(other) {
                debug!(
                    "No dictionary for language {:?} ({}), falling back to English",
                    other,
                    lang.to_name()
                );
            } else {
                debug!("Unknown language code {:?}, falling back to English", other);
            }
            "en"
        }
    }
}

/// A dictionary backed by an in-memory word list
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    identifier: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from an iterator of words. Words are lowercased; empty entries
    /// are dropped.
    pub fn from_words<I, S>(identifier: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        WordListDictionary {
            identifier: identifier.to_string(),
            words,
        }
    }

    /// Build from word-list text, one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_text(identifier: &str, text: &str) -> Self {
        Self::from_words(
            identifier,
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Number of known words - used by tests and external consumers
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the word list is empty - used by tests and external consumers
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn suggest(&self, word: &str, limit: usize) -> Vec<String> {
        let word_len = word.chars().count();

        let mut candidates: Vec<(usize, &String)> = self
            .words
            .iter()
            .filter(|w| {
                let len = w.chars().count();
                len.abs_diff(word_len) <= MAX_SUGGESTION_DISTANCE
            })
            .filter_map(|w| {
                let distance = similarity::levenshtein_distance(word, w);
                (distance <= MAX_SUGGESTION_DISTANCE).then_some((distance, w))
            })
            .collect();

        candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        candidates
            .into_iter()
            .take(limit)
            .map(|(_, w)| w.clone())
            .collect()
    }
}
