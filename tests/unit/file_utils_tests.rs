/*!
 * Tests for file utilities
 */

use std::fs;

use anyhow::Result;
use srtkit::file_utils::FileManager;

use crate::common;

#[test]
fn test_readToStringLossy_withValidUtf8_shouldReadVerbatim() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "test.srt", "héllo wörld")?;

    let content = FileManager::read_to_string_lossy(&path)?;

    assert_eq!(content, "héllo wörld");
    Ok(())
}

#[test]
fn test_readToStringLossy_withInvalidUtf8_shouldSubstitute() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("broken.srt");
    fs::write(&path, b"ok \xFF\xFE bytes")?;

    let content = FileManager::read_to_string_lossy(&path)?;

    assert!(content.starts_with("ok "));
    assert!(content.contains('\u{FFFD}'));
    assert!(content.ends_with(" bytes"));
    Ok(())
}

#[test]
fn test_readToStringLossy_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string_lossy("/nonexistent/missing.srt");

    assert!(result.is_err());
}

#[test]
fn test_writeToFile_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.srt");

    FileManager::write_to_file(&path, "content here")?;

    assert_eq!(FileManager::read_to_string_lossy(&path)?, "content here");
    Ok(())
}

#[test]
fn test_hasImageSource_shouldDetectSiblingSupFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let srt_path = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;

    assert!(!FileManager::has_image_source(&srt_path));

    common::create_test_file(temp_dir.path(), "movie.sup", "binary-ish")?;
    assert!(FileManager::has_image_source(&srt_path));
    Ok(())
}

#[test]
fn test_fileExists_shouldDistinguishFilesFromDirs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;

    assert!(FileManager::file_exists(&path));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.srt")));
    Ok(())
}
