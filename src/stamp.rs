/*!
 * Creator stamp management for SRT documents.
 *
 * A stamp is a synthetic first entry carrying attribution text. Inserting one
 * re-indexes the rest of the document; removing one restores a 1..N indexing.
 * Both operations are guarded by interval collision checks against the
 * existing entries.
 */

use log::debug;
use serde::Serialize;

use crate::errors::SubtitleError;
use crate::subtitle_processor::{SubtitleDocument, SubtitleEntry};

/// Marker substrings that identify a creator stamp. A document is considered
/// stamped when its first entry's text contains any of these,
/// case-insensitively.
pub const STAMP_MARKERS: [&str; 2] = ["srtkit", "subs prepared by"];

/// Find entries whose interval overlaps the candidate interval.
///
/// Overlap uses half-open semantics: `entry.start < candidate_end AND
/// entry.end > candidate_start`, so touching endpoints do not collide.
/// Entries with inverted intervals (end before start) can never satisfy both
/// conditions and simply never match.
///
/// Returns the indices of overlapping entries, or `MalformedTimeRange` when
/// the candidate interval is empty or inverted.
pub fn find_overlaps(
    entries: &[SubtitleEntry],
    candidate_start_ms: u64,
    candidate_end_ms: u64,
) -> Result<Vec<usize>, SubtitleError> {
    if candidate_start_ms >= candidate_end_ms {
        return Err(SubtitleError::MalformedTimeRange {
            start_ms: candidate_start_ms,
            end_ms: candidate_end_ms,
        });
    }

    Ok(entries
        .iter()
        .filter(|e| e.start_ms < candidate_end_ms && e.end_ms > candidate_start_ms)
        .map(|e| e.index)
        .collect())
}

/// Result of a stamp collision check
#[derive(Debug, Clone, Serialize)]
pub struct StampCheck {
    /// Whether any entry overlaps the candidate interval
    pub collision: bool,
    /// Indices of the overlapping entries
    pub overlapping: Vec<usize>,
    /// Whether the document already carries a stamp
    pub already_stamped: bool,
}

/// Stamp operations over a parsed document
pub struct StampManager;

impl StampManager {
    /// Whether the document carries a creator stamp: non-empty, and the first
    /// entry's text contains a reserved marker substring (case-insensitive).
    pub fn has_stamp(document: &SubtitleDocument) -> bool {
        let Some(first) = document.entries.first() else {
            return false;
        };
        let first_text = first.text.to_lowercase();
        STAMP_MARKERS.iter().any(|marker| first_text.contains(marker))
    }

    /// Check whether a stamp over the given interval would collide with
    /// existing entries, and whether a stamp is already present.
    pub fn check(
        document: &SubtitleDocument,
        start_ms: u64,
        end_ms: u64,
    ) -> Result<StampCheck, SubtitleError> {
        let overlapping = find_overlaps(&document.entries, start_ms, end_ms)?;

        Ok(StampCheck {
            collision: !overlapping.is_empty(),
            overlapping,
            already_stamped: Self::has_stamp(document),
        })
    }

    /// Insert a creator stamp as entry #1.
    ///
    /// Fails when the interval is inverted, when a stamp already exists, or
    /// when the interval overlaps existing entries. On success every
    /// pre-existing entry's index is incremented by one, preserving relative
    /// order and any index gaps.
    pub fn insert(
        document: &mut SubtitleDocument,
        start_ms: u64,
        end_ms: u64,
        text: &str,
    ) -> Result<(), SubtitleError> {
        if start_ms >= end_ms {
            return Err(SubtitleError::MalformedTimeRange { start_ms, end_ms });
        }

        if Self::has_stamp(document) {
            return Err(SubtitleError::AlreadyStamped);
        }

        let colliding = find_overlaps(&document.entries, start_ms, end_ms)?;
        if !colliding.is_empty() {
            return Err(SubtitleError::Collision(colliding));
        }

        for entry in &mut document.entries {
            entry.index += 1;
        }
        document
            .entries
            .insert(0, SubtitleEntry::new(1, start_ms, end_ms, text.to_string()));

        debug!("Inserted stamp entry, document now has {} entries", document.len());
        Ok(())
    }

    /// Remove the creator stamp.
    ///
    /// Fails when the document is empty or carries no stamp. On success the
    /// first entry is dropped and the remaining entries are re-indexed 1..N
    /// in order.
    pub fn remove(document: &mut SubtitleDocument) -> Result<(), SubtitleError> {
        if document.is_empty() {
            return Err(SubtitleError::EmptyDocument);
        }

        if !Self::has_stamp(document) {
            return Err(SubtitleError::NoStampFound);
        }

        document.entries.remove(0);
        for (i, entry) in document.entries.iter_mut().enumerate() {
            entry.index = i + 1;
        }

        debug!("Removed stamp entry, document now has {} entries", document.len());
        Ok(())
    }
}
