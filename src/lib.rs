/*!
 * # srtkit
 *
 * A Rust library for managing SubRip (SRT) subtitle artifacts produced by
 * extraction and OCR tools.
 *
 * ## Features
 *
 * - Parse and serialize SRT documents, tolerating malformed blocks
 * - Timecode arithmetic with canonical `HH:MM:SS,mmm` formatting
 * - Creator stamp insertion/removal with interval collision detection
 * - Staged text correction: character replacements, invalid-character scan,
 *   dictionary spell-check
 * - Cross-track synchronization by text similarity with a median offset
 *   estimate
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: timecode parsing and formatting
 * - `subtitle_processor`: SRT document model and parsing
 * - `stamp`: collision detection and creator stamp management
 * - `correction`: the staged correction pipeline:
 *   - `correction::replacements`: literal substring replacements
 *   - `correction::charset`: invalid-character scan
 *   - `correction::spelling`: dictionary spell-check
 *   - `correction::service`: stage orchestration
 * - `sync`: cross-track comparison and offset application
 * - `similarity`: text similarity shared by sync and spelling
 * - `dictionary`: dictionary seam and word-list implementation
 * - `app_config`: correction configuration and compact-form parsers
 * - `file_utils`: whole-file read/write helpers
 * - `app_controller`: file-level operation orchestration
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod correction;
pub mod dictionary;
pub mod errors;
pub mod file_utils;
pub mod similarity;
pub mod stamp;
pub mod subtitle_processor;
pub mod sync;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::{CorrectionConfig, IgnoreSet, ReplacementRule};
pub use app_controller::Controller;
pub use correction::{CorrectionIssue, CorrectionOutcome, CorrectionService};
pub use dictionary::{Dictionary, WordListDictionary};
pub use errors::{AppError, SubtitleError};
pub use stamp::{StampCheck, StampManager};
pub use subtitle_processor::{SubtitleDocument, SubtitleEntry};
pub use sync::{SyncEngine, SyncMatch, SyncReport};
