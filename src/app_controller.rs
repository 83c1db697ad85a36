use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

use crate::app_config::CorrectionConfig;
use crate::correction::{CorrectionOutcome, CorrectionService};
use crate::dictionary::Dictionary;
use crate::file_utils::FileManager;
use crate::stamp::{StampCheck, StampManager};
use crate::subtitle_processor::SubtitleDocument;
use crate::sync::{SyncEngine, SyncReport};
use crate::timecode;

// @module: File-level orchestration of subtitle operations

/// Number of entries shown in a document info preview
const INFO_PREVIEW_ENTRIES: usize = 3;

/// Summary of a subtitle file
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    /// Number of parsed entries
    pub entry_count: usize,
    /// End time of the last entry as `HH:MM:SS`, if any
    pub duration: Option<String>,
    /// First few entries rendered as SRT text
    pub preview: Option<String>,
}

/// Coordinates file reads/writes around the in-memory subtitle operations.
///
/// Every operation is an independent read-compute-write unit: the document is
/// parsed from the file, transformed, re-serialized and written back whole.
/// Concurrent operations on the same file are not coordinated; the last
/// writer wins.
pub struct Controller {
    correction: CorrectionService,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new() -> Self {
        Self {
            correction: CorrectionService::new(),
        }
    }

    // @method: Create a controller with the given correction configuration
    pub fn with_config(config: CorrectionConfig) -> Result<Self> {
        config.validate().context("Correction configuration invalid")?;
        Ok(Self {
            correction: CorrectionService::with_config(config),
        })
    }

    /// Parse the subtitle file at `path`
    pub fn load(&self, path: &Path) -> Result<SubtitleDocument> {
        let content = FileManager::read_to_string_lossy(path)?;
        let document = SubtitleDocument::parse(&content);
        debug!("Parsed {} entries from {:?}", document.len(), path);
        Ok(document)
    }

    fn persist(&self, path: &Path, document: &SubtitleDocument) -> Result<()> {
        FileManager::write_to_file(path, &document.to_srt_string())
    }

    /// Summarize a subtitle file: entry count, duration, preview
    pub fn info(&self, path: &Path) -> Result<DocumentInfo> {
        let document = self.load(path)?;

        let preview_doc = SubtitleDocument {
            entries: document.preview(INFO_PREVIEW_ENTRIES).to_vec(),
        };
        let preview = (!preview_doc.is_empty()).then(|| preview_doc.to_srt_string().trim().to_string());

        Ok(DocumentInfo {
            entry_count: document.len(),
            duration: document.duration_ms().map(timecode::format_duration),
            preview,
        })
    }

    /// Replace the text of a single entry, preserving its timestamps
    pub fn edit_entry(&self, path: &Path, index: usize, new_text: &str) -> Result<()> {
        let mut document = self.load(path)?;
        document.edit_entry(index, new_text)?;
        self.persist(path, &document)?;
        info!("Updated entry {} in {:?}", index, path);
        Ok(())
    }

    /// Check whether a stamp over the given interval would collide
    pub fn check_stamp(&self, path: &Path, start_ms: u64, end_ms: u64) -> Result<StampCheck> {
        let document = self.load(path)?;
        Ok(StampManager::check(&document, start_ms, end_ms)?)
    }

    /// Insert a creator stamp and rewrite the file
    pub fn add_stamp(&self, path: &Path, start_ms: u64, end_ms: u64, text: &str) -> Result<()> {
        let mut document = self.load(path)?;
        StampManager::insert(&mut document, start_ms, end_ms, text)?;
        self.persist(path, &document)?;
        info!("Added creator stamp to {:?}", path);
        Ok(())
    }

    /// Remove the creator stamp and rewrite the file
    pub fn remove_stamp(&self, path: &Path) -> Result<()> {
        let mut document = self.load(path)?;
        StampManager::remove(&mut document)?;
        self.persist(path, &document)?;
        info!("Removed creator stamp from {:?}", path);
        Ok(())
    }

    /// Run the correction pipeline over a subtitle file.
    ///
    /// When the replacement stage modifies the text, the corrected file is
    /// persisted before the result is returned; the reported issues always
    /// refer to the persisted text.
    pub fn correct(&self, path: &Path, dictionary: Option<&dyn Dictionary>) -> Result<CorrectionOutcome> {
        let content = FileManager::read_to_string_lossy(path)?;

        let mut outcome = self.correction.run(&content, dictionary);

        if let Some(corrected) = &outcome.corrected_text {
            FileManager::write_to_file(path, corrected)?;
            info!(
                "Persisted {} replacement(s) to {:?}",
                outcome.replacements_made, path
            );
        }

        outcome.has_image_source = FileManager::has_image_source(path);
        Ok(outcome)
    }

    /// Compare two subtitle files and suggest an alignment offset
    pub fn sync(&self, reference_path: &Path, target_path: &Path) -> Result<SyncReport> {
        let reference = self.load(reference_path)?;
        let target = self.load(target_path)?;
        Ok(SyncEngine::compare(&reference, &target))
    }

    /// Shift every entry of a subtitle file by a signed offset and rewrite it
    pub fn apply_offset(&self, path: &Path, offset_ms: i64) -> Result<()> {
        let mut document = self.load(path)?;
        SyncEngine::apply_offset(&mut document, offset_ms);
        self.persist(path, &document)?;
        info!("Shifted {:?} by {}ms", path, offset_ms);
        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
