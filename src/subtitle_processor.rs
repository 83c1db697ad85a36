use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::timecode;

// @module: SRT document model, parsing and serialization

// @const: Entry time line, `<start> --> <end>`, anchored at the start of the line
static TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{1,3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{1,3})").unwrap()
});

// @const: Block separator, runs of two or more newlines
static BLOCK_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Entry index, unique within a document but not necessarily contiguous
    pub index: usize,

    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms
    pub end_ms: u64,

    // @field: Subtitle text, lines joined with '\n' (may be empty)
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(index: usize, start_ms: u64, end_ms: u64, text: String) -> Self {
        SubtitleEntry {
            index,
            start_ms,
            end_ms,
            text,
        }
    }

    /// Convert start time to formatted SRT timecode
    pub fn format_start_time(&self) -> String {
        timecode::format(self.start_ms)
    }

    /// Convert end time to formatted SRT timecode
    pub fn format_end_time(&self) -> String {
        timecode::format(self.end_ms)
    }

    /// Entry text with line breaks flattened to spaces, for single-line display
    pub fn flat_text(&self) -> String {
        self.text.replace('\n', " ")
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// An ordered collection of subtitle entries in document order.
///
/// Parsing is lenient: blocks that do not form a complete entry (index line,
/// time line) are dropped rather than failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    /// Entries in document order (not necessarily sorted by index or time)
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleDocument {
    /// Create an empty document
    pub fn new() -> Self {
        SubtitleDocument { entries: Vec::new() }
    }

    /// Parse raw SRT text into a document.
    ///
    /// The text is split on blank-line runs into blocks; a block becomes an
    /// entry only if it has at least two lines, the first parses as an integer
    /// index and the second is a `<start> --> <end>` time line. Everything
    /// else is skipped, so a malformed trailing block never aborts the parse.
    pub fn parse(content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n");
        let trimmed = normalized.trim();

        let mut entries = Vec::new();
        if trimmed.is_empty() {
            return SubtitleDocument { entries };
        }

        for block in BLOCK_SPLIT_REGEX.split(trimmed) {
            let lines: Vec<&str> = block.trim().split('\n').collect();
            if lines.len() < 2 {
                debug!("Skipping short subtitle block: {:?}", block);
                continue;
            }

            let Ok(index) = lines[0].trim().parse::<usize>() else {
                debug!("Skipping block with non-numeric index line: {:?}", lines[0]);
                continue;
            };

            let Some(caps) = TIME_LINE_REGEX.captures(lines[1]) else {
                debug!("Skipping block {} with invalid time line: {:?}", index, lines[1]);
                continue;
            };

            let start_ms = timecode::parse(&caps[1]);
            let end_ms = timecode::parse(&caps[2]);
            let text = if lines.len() > 2 {
                lines[2..].join("\n")
            } else {
                String::new()
            };

            entries.push(SubtitleEntry::new(index, start_ms, end_ms, text));
        }

        SubtitleDocument { entries }
    }

    /// Serialize the document back to SRT text.
    ///
    /// Each entry is emitted as index line, time line, text body and a blank
    /// line, in document order. Timecodes are written in canonical form, so
    /// the output is parse-equivalent to the input rather than byte-identical.
    pub fn to_srt_string(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.entries.len() * 4);

        for entry in &self.entries {
            parts.push(entry.index.to_string());
            parts.push(format!(
                "{} --> {}",
                entry.format_start_time(),
                entry.format_end_time()
            ));
            parts.push(entry.text.clone());
            parts.push(String::new());
        }

        parts.join("\n")
    }

    /// Number of entries in the document
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the text of the entry with the given index.
    ///
    /// Timestamps of the target entry are preserved verbatim and all other
    /// entries are untouched.
    pub fn edit_entry(&mut self, index: usize, new_text: &str) -> Result<(), SubtitleError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.index == index)
            .ok_or(SubtitleError::EntryNotFound(index))?;

        entry.text = new_text.to_string();
        Ok(())
    }

    /// End time of the last entry, if any. Used for duration display.
    pub fn duration_ms(&self) -> Option<u64> {
        self.entries.last().map(|e| e.end_ms)
    }

    /// First `limit` entries, for preview display
    pub fn preview(&self, limit: usize) -> &[SubtitleEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Document")?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        if let Some(duration) = self.duration_ms() {
            writeln!(f, "Duration: {}", timecode::format_duration(duration))?;
        }
        Ok(())
    }
}
