/*!
 * Correction service that orchestrates the pipeline stages.
 */

use log::{debug, warn};
use serde::Serialize;

use crate::app_config::{CorrectionConfig, IgnoreSet};
use crate::dictionary::Dictionary;
use crate::subtitle_processor::SubtitleDocument;

use super::charset::{self, CharsetIssue};
use super::replacements;
use super::spelling::{self, SpellingIssue};

/// An issue found by the pipeline, tagged by the stage that produced it
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrectionIssue {
    /// Character outside the allowed subtitle set
    InvalidCharacter(CharsetIssue),
    /// Word unknown to the dictionary
    Spelling(SpellingIssue),
}

/// Complete result of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionOutcome {
    /// Text after the replacement stage, present only when it changed.
    /// The caller must persist this before acting on the issues, which were
    /// computed against it.
    #[serde(skip)]
    pub corrected_text: Option<String>,

    /// Total occurrences replaced by the replacement stage
    pub replacements_made: usize,

    /// Issues from all stages, invalid characters first
    pub issues: Vec<CorrectionIssue>,

    /// Number of invalid-character issues
    pub invalid_char_count: usize,

    /// Number of spelling issues
    pub spelling_count: usize,

    /// Whether a sibling subtitle-image source file exists for the document.
    /// Informational; set by the caller, which knows the file location.
    pub has_image_source: bool,
}

/// Correction pipeline runner
pub struct CorrectionService {
    config: CorrectionConfig,
}

impl CorrectionService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(CorrectionConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: CorrectionConfig) -> Self {
        Self { config }
    }

    /// Run the enabled stages over raw SRT text.
    ///
    /// Stage order is fixed: replacements rewrite the text, then the
    /// invalid-character scan and the spell-check run over the (possibly
    /// corrected) parsed document. The spell-check stage requires a
    /// dictionary and is skipped with a warning when none is supplied.
    pub fn run(&self, raw_text: &str, dictionary: Option<&dyn Dictionary>) -> CorrectionOutcome {
        let ignore: Option<&IgnoreSet> = self
            .config
            .ignore_enabled
            .then_some(&self.config.ignore)
            .filter(|set| !set.is_empty());

        let mut corrected_text = None;
        let mut replacements_made = 0;
        let mut text = raw_text.to_string();

        if self.config.replacements_enabled && !self.config.replacements.is_empty() {
            let outcome = replacements::apply(&text, &self.config.replacements);
            replacements_made = outcome.replacements_made;
            if outcome.modified {
                text = outcome.text;
                corrected_text = Some(text.clone());
            }
        }

        let document = SubtitleDocument::parse(&text);
        debug!(
            "Correction pipeline scanning {} entries ({} replacements made)",
            document.len(),
            replacements_made
        );

        let charset_issues = if self.config.charset_scan_enabled {
            charset::scan(&document.entries, ignore)
        } else {
            Vec::new()
        };

        let spelling_issues = if self.config.spelling_enabled {
            match dictionary {
                Some(dict) => spelling::check(&document.entries, dict, ignore),
                None => {
                    warn!("Spell-check stage enabled but no dictionary supplied, skipping");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let invalid_char_count = charset_issues.len();
        let spelling_count = spelling_issues.len();

        let mut issues: Vec<CorrectionIssue> = charset_issues
            .into_iter()
            .map(CorrectionIssue::InvalidCharacter)
            .collect();
        issues.extend(spelling_issues.into_iter().map(CorrectionIssue::Spelling));

        CorrectionOutcome {
            corrected_text,
            replacements_made,
            issues,
            invalid_char_count,
            spelling_count,
            has_image_source: false,
        }
    }
}

impl Default for CorrectionService {
    fn default() -> Self {
        Self::new()
    }
}
