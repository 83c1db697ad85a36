/*!
 * Tests for collision detection and stamp management
 */

use srtkit::errors::SubtitleError;
use srtkit::stamp::{find_overlaps, StampManager};
use srtkit::subtitle_processor::{SubtitleDocument, SubtitleEntry};

use crate::common;

fn entry(index: usize, start_ms: u64, end_ms: u64, text: &str) -> SubtitleEntry {
    SubtitleEntry::new(index, start_ms, end_ms, text.to_string())
}

fn stamped_document() -> SubtitleDocument {
    SubtitleDocument {
        entries: vec![
            entry(1, 0, 900, "Subs prepared by srtkit"),
            entry(2, 1_000, 4_000, "First real entry"),
            entry(3, 5_000, 9_000, "Second real entry"),
        ],
    }
}

#[test]
fn test_findOverlaps_withHalfOpenIntervals_shouldNotCountTouchingEndpoints() {
    let entries = vec![entry(1, 14_999, 20_000, "A"), entry(2, 15_000, 20_000, "B")];

    let overlapping = find_overlaps(&entries, 5_000, 15_000).unwrap();

    // [14999,20000) collides with [5000,15000); [15000,20000) only touches
    assert_eq!(overlapping, vec![1]);
}

#[test]
fn test_findOverlaps_withContainedEntry_shouldCollide() {
    let entries = vec![entry(7, 6_000, 8_000, "Inside")];

    let overlapping = find_overlaps(&entries, 5_000, 15_000).unwrap();

    assert_eq!(overlapping, vec![7]);
}

#[test]
fn test_findOverlaps_withInvertedCandidate_shouldReturnMalformedTimeRange() {
    let entries = vec![entry(1, 0, 1_000, "A")];

    let err = find_overlaps(&entries, 15_000, 5_000).unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedTimeRange { .. }));

    let err = find_overlaps(&entries, 5_000, 5_000).unwrap_err();
    assert!(matches!(err, SubtitleError::MalformedTimeRange { .. }));
}

#[test]
fn test_findOverlaps_withInvertedEntryInterval_shouldNeverMatch() {
    // An entry with end before start has zero width under the overlap rule
    let entries = vec![entry(1, 10_000, 5_000, "Backwards")];

    let overlapping = find_overlaps(&entries, 0, 20_000).unwrap();

    assert!(overlapping.is_empty());
}

#[test]
fn test_hasStamp_shouldMatchMarkerCaseInsensitively() {
    let mut document = stamped_document();
    assert!(StampManager::has_stamp(&document));

    document.entries[0].text = "SUBS PREPARED BY somebody".to_string();
    assert!(StampManager::has_stamp(&document));

    document.entries[0].text = "Just a regular line".to_string();
    assert!(!StampManager::has_stamp(&document));

    assert!(!StampManager::has_stamp(&SubtitleDocument::new()));
}

#[test]
fn test_hasStamp_shouldOnlyInspectFirstEntry() {
    let document = SubtitleDocument {
        entries: vec![
            entry(1, 0, 900, "Regular entry"),
            entry(2, 1_000, 2_000, "Subs prepared by srtkit"),
        ],
    };

    assert!(!StampManager::has_stamp(&document));
}

#[test]
fn test_insert_shouldPrependAndShiftIndices() {
    let mut document = common::sample_document();

    StampManager::insert(&mut document, 0, 900, "Subs prepared by srtkit").unwrap();

    assert_eq!(document.len(), 4);
    assert_eq!(document.entries[0].index, 1);
    assert_eq!(document.entries[0].start_ms, 0);
    assert_eq!(document.entries[0].end_ms, 900);
    assert_eq!(document.entries[0].text, "Subs prepared by srtkit");

    // Every original entry's index moved up by exactly one; text and times intact
    assert_eq!(document.entries[1].index, 2);
    assert_eq!(document.entries[1].start_ms, 1_000);
    assert_eq!(document.entries[1].text, "This is a test subtitle.");
    assert_eq!(document.entries[3].index, 4);
    assert_eq!(document.entries[3].end_ms, 14_000);
}

#[test]
fn test_insert_shouldPreserveIndexGaps() {
    let mut document = SubtitleDocument {
        entries: vec![entry(10, 1_000, 2_000, "Ten"), entry(42, 3_000, 4_000, "Forty-two")],
    };

    StampManager::insert(&mut document, 0, 900, "Subs prepared by srtkit").unwrap();

    assert_eq!(document.entries[1].index, 11);
    assert_eq!(document.entries[2].index, 43);
}

#[test]
fn test_insert_whenAlreadyStamped_shouldFail() {
    let mut document = stamped_document();

    let err = StampManager::insert(&mut document, 20_000, 21_000, "Another stamp").unwrap_err();

    assert_eq!(err, SubtitleError::AlreadyStamped);
    assert_eq!(document.len(), 3);
}

#[test]
fn test_insert_withInvertedRange_shouldFail() {
    let mut document = common::sample_document();

    let err = StampManager::insert(&mut document, 900, 0, "Stamp").unwrap_err();

    assert!(matches!(err, SubtitleError::MalformedTimeRange { .. }));
}

#[test]
fn test_insert_withCollision_shouldReportIndices() {
    let mut document = common::sample_document();

    // Sample entries sit at 1-4s, 5-9s and 10-14s; this window clips the last two
    let err = StampManager::insert(&mut document, 5_000, 15_000, "Stamp").unwrap_err();

    assert_eq!(err, SubtitleError::Collision(vec![2, 3]));
    assert_eq!(err.colliding_indices(), Some(&[2, 3][..]));
    assert_eq!(document.len(), 3);
}

#[test]
fn test_remove_shouldDropStampAndReindex() {
    let mut document = stamped_document();

    StampManager::remove(&mut document).unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document.entries[0].index, 1);
    assert_eq!(document.entries[0].text, "First real entry");
    assert_eq!(document.entries[1].index, 2);
    assert_eq!(document.entries[1].text, "Second real entry");
}

#[test]
fn test_remove_withEmptyDocument_shouldFail() {
    let mut document = SubtitleDocument::new();

    let err = StampManager::remove(&mut document).unwrap_err();

    assert_eq!(err, SubtitleError::EmptyDocument);
}

#[test]
fn test_remove_withoutStamp_shouldFail() {
    let mut document = common::sample_document();

    let err = StampManager::remove(&mut document).unwrap_err();

    assert_eq!(err, SubtitleError::NoStampFound);
}

#[test]
fn test_insertThenRemove_shouldRestoreOriginalDocument() {
    let original = common::sample_document();
    let mut document = original.clone();

    StampManager::insert(&mut document, 0, 900, "Subs prepared by srtkit").unwrap();
    StampManager::remove(&mut document).unwrap();

    assert_eq!(document, original);
}

#[test]
fn test_check_shouldReportCollisionAndStampState() {
    let document = stamped_document();

    let check = StampManager::check(&document, 2_000, 6_000).unwrap();

    assert!(check.collision);
    assert_eq!(check.overlapping, vec![2, 3]);
    assert!(check.already_stamped);

    let clear = StampManager::check(&document, 20_000, 30_000).unwrap();
    assert!(!clear.collision);
    assert!(clear.overlapping.is_empty());
}
