use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module holds the typed correction settings and the parsers for the
/// compact user-facing forms (`key=value,...` replacement specs and
/// comma-separated ignore lists).

/// A single ordered character replacement rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Literal substring to search for
    pub from: String,

    /// Literal replacement (empty means deletion)
    #[serde(default)]
    pub to: String,
}

impl ReplacementRule {
    /// Create a new replacement rule
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        ReplacementRule {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Parse a replacement spec in the form `key=value,key=value`.
///
/// Order is preserved: later rules see the output of earlier ones. An empty
/// value means deletion. Empty segments (from trailing or doubled commas) are
/// skipped; anything else that is not a well-formed `key=value` pair with a
/// non-empty key is rejected.
pub fn parse_replacement_rules(spec: &str) -> Result<Vec<ReplacementRule>> {
    let mut rules = Vec::new();

    if spec.trim().is_empty() {
        return Ok(rules);
    }

    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let Some((from, to)) = part.split_once('=') else {
            return Err(anyhow!("Malformed replacement pair (missing '='): {:?}", part));
        };

        if from.is_empty() {
            return Err(anyhow!("Malformed replacement pair (empty key): {:?}", part));
        }

        rules.push(ReplacementRule::new(from, to));
    }

    Ok(rules)
}

/// A set of characters and whole words excluded from correction issues.
///
/// Character membership is exact; word membership is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet {
    items: Vec<String>,
}

impl IgnoreSet {
    /// Parse a comma-separated ignore list, e.g. `"Gandalf,Frodo,™"`
    pub fn parse(spec: &str) -> Self {
        let items = spec
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        IgnoreSet { items }
    }

    /// Whether the set contains this exact character
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.items.iter().any(|item| item == s)
    }

    /// Whether the set contains this word, compared case-insensitively
    pub fn contains_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.items.iter().any(|item| item.to_lowercase() == lower)
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

/// Configuration for the staged correction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Whether the replacement stage runs
    #[serde(default = "default_true")]
    pub replacements_enabled: bool,

    /// Ordered replacement rules, applied sequentially
    #[serde(default)]
    pub replacements: Vec<ReplacementRule>,

    /// Whether the ignore set is applied
    #[serde(default = "default_true")]
    pub ignore_enabled: bool,

    /// Characters and words excluded from issues
    #[serde(default)]
    pub ignore: IgnoreSet,

    /// Whether the invalid-character scan runs
    #[serde(default = "default_true")]
    pub charset_scan_enabled: bool,

    /// Whether the dictionary spell-check runs
    #[serde(default = "default_true")]
    pub spelling_enabled: bool,

    /// Subtitle language code, mapped to a dictionary identifier
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            replacements_enabled: true,
            replacements: Vec::new(),
            ignore_enabled: true,
            ignore: IgnoreSet::default(),
            charset_scan_enabled: true,
            spelling_enabled: true,
            language: default_language(),
        }
    }
}

impl CorrectionConfig {
    /// Build a config from the compact user-facing forms
    pub fn from_compact(replacements_spec: &str, ignore_spec: &str, language: &str) -> Result<Self> {
        Ok(Self {
            replacements: parse_replacement_rules(replacements_spec)?,
            ignore: IgnoreSet::parse(ignore_spec),
            language: language.trim().to_lowercase(),
            ..Default::default()
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("Subtitle language code must not be empty"));
        }
        Ok(())
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}
