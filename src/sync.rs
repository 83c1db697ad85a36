/*!
 * Cross-track synchronization.
 *
 * Compares two parsed subtitle documents, pairs entries by text similarity
 * and derives the time offset that would align the target track to the
 * reference track. The suggested offset is the median of the per-match
 * offsets, which keeps a handful of false pairings from skewing the result.
 */

use log::debug;
use serde::Serialize;

use crate::similarity;
use crate::subtitle_processor::SubtitleDocument;
use crate::timecode;

/// Minimum similarity for two entries to count as a match (exclusive)
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Maximum number of matches returned in a report
pub const MAX_REPORTED_MATCHES: usize = 50;

/// A matched entry pair across the two documents
#[derive(Debug, Clone, Serialize)]
pub struct SyncMatch {
    /// Index of the matched entry in the reference document
    pub reference_index: usize,
    /// Index of the entry in the target document
    pub target_index: usize,
    /// Reference entry text
    pub reference_text: String,
    /// Target entry text
    pub target_text: String,
    /// Reference entry start time, formatted
    pub reference_start: String,
    /// Target entry start time, formatted
    pub target_start: String,
    /// Similarity ratio, rounded to two decimals
    pub similarity: f64,
    /// `target.start - reference.start` in milliseconds
    pub offset_ms: i64,
}

/// Result of comparing two documents
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Entry count of the reference document
    pub reference_count: usize,
    /// Entry count of the target document
    pub target_count: usize,
    /// Median per-match offset in milliseconds, 0 when nothing matched
    pub suggested_offset_ms: i64,
    /// Matched pairs in target order, truncated to [`MAX_REPORTED_MATCHES`]
    pub matches: Vec<SyncMatch>,
}

/// Document comparison and offset application
pub struct SyncEngine;

impl SyncEngine {
    /// Compare a target document against a reference document.
    ///
    /// For every target entry the reference entries are scanned in document
    /// order and the first entry reaching the maximum similarity above the
    /// threshold is kept; target entries without a qualifying match are
    /// dropped. The suggested offset is the lower-middle median of all match
    /// offsets, so an even-sized list yields element `count / 2` of the
    /// sorted offsets rather than an average.
    pub fn compare(reference: &SubtitleDocument, target: &SubtitleDocument) -> SyncReport {
        let mut matches = Vec::new();
        let mut offsets = Vec::new();

        for target_entry in &target.entries {
            let mut best_ratio = 0.0_f64;
            let mut best_entry = None;

            for reference_entry in &reference.entries {
                let ratio = similarity::ratio(&reference_entry.text, &target_entry.text);
                if ratio > best_ratio && ratio > SIMILARITY_THRESHOLD {
                    best_ratio = ratio;
                    best_entry = Some(reference_entry);
                }
            }

            if let Some(reference_entry) = best_entry {
                let offset_ms = target_entry.start_ms as i64 - reference_entry.start_ms as i64;
                offsets.push(offset_ms);

                matches.push(SyncMatch {
                    reference_index: reference_entry.index,
                    target_index: target_entry.index,
                    reference_text: reference_entry.text.clone(),
                    target_text: target_entry.text.clone(),
                    reference_start: timecode::format(reference_entry.start_ms),
                    target_start: timecode::format(target_entry.start_ms),
                    similarity: (best_ratio * 100.0).round() / 100.0,
                    offset_ms,
                });
            }
        }

        let suggested_offset_ms = if offsets.is_empty() {
            0
        } else {
            let mut sorted = offsets.clone();
            sorted.sort_unstable();
            sorted[sorted.len() / 2]
        };

        debug!(
            "Sync compare: {} of {} target entries matched, suggested offset {}ms",
            offsets.len(),
            target.len(),
            suggested_offset_ms
        );

        matches.truncate(MAX_REPORTED_MATCHES);

        SyncReport {
            reference_count: reference.len(),
            target_count: target.len(),
            suggested_offset_ms,
            matches,
        }
    }

    /// Shift every entry of a document by a signed millisecond offset.
    ///
    /// Timecodes are non-negative, so a negative shift saturates at zero.
    pub fn apply_offset(document: &mut SubtitleDocument, offset_ms: i64) {
        for entry in &mut document.entries {
            entry.start_ms = entry.start_ms.saturating_add_signed(offset_ms);
            entry.end_ms = entry.end_ms.saturating_add_signed(offset_ms);
        }
    }
}
