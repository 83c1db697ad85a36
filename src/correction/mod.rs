/*!
 * Staged text correction for SRT documents.
 *
 * The pipeline runs three independently toggleable stages in a fixed order,
 * because each stage's output feeds the next:
 *
 * 1. **Replacement** (`replacements`): ordered literal substring replacements
 *    over the raw file text, typically undoing systematic OCR mistakes.
 * 2. **Invalid-character scan** (`charset`): flags characters outside the
 *    allowed subtitle character set.
 * 3. **Dictionary spell-check** (`spelling`): flags words unknown to the
 *    configured dictionary, with suggestions.
 *
 * `service` orchestrates the stages against a configuration.
 */

pub mod charset;
pub mod replacements;
pub mod service;
pub mod spelling;

// Re-export main types
pub use service::{CorrectionIssue, CorrectionOutcome, CorrectionService};
