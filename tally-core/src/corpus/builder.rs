//! Builds a sentence dataset from a raw text file.
//!
//! One record per non-blank line. The output schema is `sentence,length`,
//! ready to be written with [`write_csv`](super::write_csv) and loaded back
//! by the [`Loader`](super::Loader).

use super::{token_length, Corpus, Record, Schema};
use crate::analyzer::TextNormalizer;
use std::path::Path;
use std::sync::Arc;
use tally_types::config::{DEFAULT_LENGTH_FIELD, DEFAULT_TEXT_FIELD};
use tally_types::LoadError;

/// Line-per-record dataset builder.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    clean: bool,
    min_length: u32,
}

impl DatasetBuilder {
    /// Builder that keeps lines verbatim (trimmed) with no length floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, lines are lowercased and stripped of punctuation before storing.
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Drops lines with fewer than `min_length` tokens.
    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    /// Builds the dataset from raw text.
    pub fn build(&self, raw: &str) -> Corpus {
        let normalizer = TextNormalizer::new();
        let mut dropped = 0usize;

        let records: Vec<Record> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let sentence = if self.clean {
                    normalizer.normalize(line)
                } else {
                    line.to_owned()
                };
                let length = token_length(&sentence);
                if sentence.is_empty() || length < self.min_length {
                    dropped += 1;
                    return None;
                }
                Some(Record::new(vec![sentence, length.to_string()], length))
            })
            .collect();

        log::info!(
            "built dataset: {} sentences kept, {} dropped",
            records.len(),
            dropped
        );

        let schema = Schema {
            columns: vec![DEFAULT_TEXT_FIELD.to_owned(), DEFAULT_LENGTH_FIELD.to_owned()],
            text_column: 0,
            length_column: 1,
        };
        Corpus::new(Arc::new(schema), records)
    }

    /// Reads `path` as UTF-8 and builds the dataset.
    pub fn build_path(&self, path: &Path) -> Result<Corpus, LoadError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(self.build(&raw))
    }
}
