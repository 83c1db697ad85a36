/*!
 * Error types for the srtkit application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with subtitle documents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// An interval-accepting operation received start >= end
    #[error("Invalid time range: start {start_ms}ms must be before end {end_ms}ms")]
    MalformedTimeRange {
        /// Candidate start in milliseconds
        start_ms: u64,
        /// Candidate end in milliseconds
        end_ms: u64,
    },

    /// No entry with the requested index exists in the document
    #[error("Subtitle entry {0} not found")]
    EntryNotFound(usize),

    /// A creator stamp is already present in the document
    #[error("A creator stamp already exists in this document")]
    AlreadyStamped,

    /// No creator stamp was found to remove
    #[error("No creator stamp found in this document")]
    NoStampFound,

    /// The candidate interval overlaps existing entries
    #[error("Stamp collides with existing entries: {}", format_indices(.0))]
    Collision(Vec<usize>),

    /// The document has no entries
    #[error("Document contains no subtitle entries")]
    EmptyDocument,
}

impl SubtitleError {
    /// Colliding entry indices, when this is a collision error
    pub fn colliding_indices(&self) -> Option<&[usize]> {
        match self {
            Self::Collision(indices) => Some(indices),
            _ => None,
        }
    }
}

fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
