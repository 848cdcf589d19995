//! Explorer configuration.
//!
//! Resolved once at startup (from defaults, an optional JSON file, then
//! command-line overrides) and passed by reference to every stage.

use crate::TopK;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the free-text column.
pub const DEFAULT_TEXT_FIELD: &str = "sentence";
/// Default name of the length column.
pub const DEFAULT_LENGTH_FIELD: &str = "length";
/// Default number of words in the frequency chart.
pub const DEFAULT_TOP_WORDS: usize = 20;
/// Default number of bigrams in the bigram chart.
pub const DEFAULT_TOP_BIGRAMS: usize = 10;
/// Default number of histogram buckets.
pub const DEFAULT_LENGTH_BINS: usize = 10;
/// Tokens shorter than this (in characters) are discarded.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;
/// Default number of preview rows.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Errors raised while reading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A field holds a value the pipeline cannot use.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    /// The configuration file is not valid JSON for this schema.
    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Pipeline configuration.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```
/// use tally_types::ExplorerConfig;
///
/// let cfg = ExplorerConfig::from_json_str(r#"{ "text_field": "text" }"#).unwrap();
/// assert_eq!(cfg.text_field, "text");
/// assert_eq!(cfg.top_words, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Column holding the text to analyze.
    pub text_field: String,
    /// Column holding (or receiving) the record length.
    pub length_field: String,
    /// Number of words kept in the frequency table.
    pub top_words: usize,
    /// Number of bigrams kept in the bigram table.
    pub top_bigrams: usize,
    /// Number of buckets in the length histogram.
    pub length_bins: usize,
    /// Minimum token length in characters.
    pub min_token_chars: usize,
    /// Whether word-cloud weights are produced.
    pub enable_word_cloud: bool,
    /// Number of rows shown in the dataset preview.
    pub preview_rows: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            text_field: DEFAULT_TEXT_FIELD.to_owned(),
            length_field: DEFAULT_LENGTH_FIELD.to_owned(),
            top_words: DEFAULT_TOP_WORDS,
            top_bigrams: DEFAULT_TOP_BIGRAMS,
            length_bins: DEFAULT_LENGTH_BINS,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            enable_word_cloud: true,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl ExplorerConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text_field.is_empty() {
            return Err(ConfigError::Invalid("text_field must not be empty"));
        }
        if self.length_field.is_empty() {
            return Err(ConfigError::Invalid("length_field must not be empty"));
        }
        if self.text_field == self.length_field {
            return Err(ConfigError::Invalid(
                "text_field and length_field must differ",
            ));
        }
        if self.min_token_chars == 0 {
            return Err(ConfigError::Invalid("min_token_chars must be at least 1"));
        }
        Ok(())
    }

    /// Truncation used for the word-frequency table.
    #[inline]
    pub fn word_limit(&self) -> TopK {
        TopK::First(self.top_words)
    }

    /// Truncation used for the bigram table.
    #[inline]
    pub fn bigram_limit(&self) -> TopK {
        TopK::First(self.top_bigrams)
    }
}
