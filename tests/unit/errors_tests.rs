/*!
 * Tests for error types
 */

use srtkit::errors::{AppError, SubtitleError};

#[test]
fn test_subtitleError_display_shouldDescribeCondition() {
    let err = SubtitleError::MalformedTimeRange {
        start_ms: 5_000,
        end_ms: 1_000,
    };
    assert!(err.to_string().contains("5000"));
    assert!(err.to_string().contains("1000"));

    assert!(SubtitleError::EntryNotFound(7).to_string().contains('7'));
}

#[test]
fn test_collisionError_shouldCarryIndices() {
    let err = SubtitleError::Collision(vec![2, 3, 5]);

    assert_eq!(err.colliding_indices(), Some(&[2, 3, 5][..]));
    assert_eq!(err.to_string(), "Stamp collides with existing entries: 2, 3, 5");

    assert_eq!(SubtitleError::AlreadyStamped.colliding_indices(), None);
}

#[test]
fn test_appError_fromSubtitleError_shouldWrap() {
    let err: AppError = SubtitleError::EmptyDocument.into();

    assert!(matches!(err, AppError::Subtitle(SubtitleError::EmptyDocument)));
    assert!(err.to_string().contains("no subtitle entries"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: AppError = io.into();

    assert!(matches!(err, AppError::File(_)));
}
