use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File utilities for subtitle storage

// Extension of the binary subtitle-image source that may sit next to an SRT
const IMAGE_SOURCE_EXTENSION: &str = "sup";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string, substituting invalid UTF-8 sequences.
    ///
    /// Subtitle files arrive from OCR and extraction tools with unreliable
    /// encodings; decoding failures are replaced, never surfaced.
    pub fn read_to_string_lossy<P: AsRef<Path>>(path: P) -> Result<String> {
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write a string to a file, replacing existing content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Path of the sibling subtitle-image source for an SRT file (same stem,
    /// `.sup` extension)
    pub fn image_source_path<P: AsRef<Path>>(srt_path: P) -> PathBuf {
        srt_path.as_ref().with_extension(IMAGE_SOURCE_EXTENSION)
    }

    /// Whether a sibling subtitle-image source exists for an SRT file
    pub fn has_image_source<P: AsRef<Path>>(srt_path: P) -> bool {
        Self::file_exists(Self::image_source_path(srt_path))
    }
}
