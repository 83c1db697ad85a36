/*!
 * Invalid-character stage: flags characters outside the allowed subtitle set.
 */

use serde::Serialize;

use crate::app_config::IgnoreSet;
use crate::subtitle_processor::SubtitleEntry;

// Punctuation permitted in subtitle text beyond letters, digits and whitespace
const ALLOWED_PUNCTUATION: &str = "!?.,:-\"'…—–‘’“”()";

/// Whether a character belongs to the allowed subtitle character set
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(c)
}

/// A character found outside the allowed set
#[derive(Debug, Clone, Serialize)]
pub struct CharsetIssue {
    /// Index of the entry containing the character
    pub entry_index: usize,
    /// Entry text with line breaks flattened to spaces
    pub text: String,
    /// Character position within the entry text
    pub position: usize,
    /// The offending character
    pub character: char,
}

/// Scan entry texts for characters outside the allowed set.
///
/// Characters present in the ignore set are skipped. Positions are character
/// offsets into the entry's text as parsed (line breaks included).
pub fn scan(entries: &[SubtitleEntry], ignore: Option<&IgnoreSet>) -> Vec<CharsetIssue> {
    let mut issues = Vec::new();

    for entry in entries {
        for (pos, c) in entry.text.chars().enumerate() {
            if is_allowed_char(c) {
                continue;
            }
            if ignore.is_some_and(|set| set.contains_char(c)) {
                continue;
            }

            issues.push(CharsetIssue {
                entry_index: entry.index,
                text: entry.flat_text(),
                position: pos,
                character: c,
            });
        }
    }

    issues
}
