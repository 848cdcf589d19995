//! Core types shared across the tally corpus explorer.
//!
//! This crate holds the values that flow between pipeline stages and out to
//! the presentation layer. Keeping them separate from the pipeline means:
//!
//! - **Stable boundary**: a UI or export layer can depend on these types
//!   without pulling in the CSV reader or the analyzer
//! - **Explicit lossiness**: every top-K result is a [`Ranked`] that remembers
//!   how much was cut off
//! - **One error vocabulary**: loader and configuration failures live here

#![warn(missing_docs)]

use core::fmt;
use serde::{Deserialize, Serialize};

pub mod config;

pub use config::{ConfigError, ExplorerConfig};

/// Occurrence count of a token or bigram.
pub type Count = u64;

/// A normalized token together with its exact occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Normalized token text.
    pub token: String,
    /// Number of occurrences (always >= 1).
    pub count: Count,
}

impl FrequencyEntry {
    /// Creates a new entry.
    #[inline]
    pub fn new(token: impl Into<String>, count: Count) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token, self.count)
    }
}

/// Two adjacent tokens from one record, stored space-joined, with a corpus-wide count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigramEntry {
    /// The two tokens joined by a single ASCII space.
    pub bigram: String,
    /// Number of occurrences across the corpus (always >= 1).
    pub count: Count,
}

impl BigramEntry {
    /// Creates a new entry from an already joined bigram.
    #[inline]
    pub fn new(bigram: impl Into<String>, count: Count) -> Self {
        Self {
            bigram: bigram.into(),
            count,
        }
    }

    /// Returns the two halves of the bigram.
    ///
    /// Tokens never contain spaces, so the first space is the separator.
    pub fn parts(&self) -> (&str, &str) {
        self.bigram
            .split_once(' ')
            .unwrap_or((self.bigram.as_str(), ""))
    }
}

impl fmt::Display for BigramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bigram, self.count)
    }
}

/// How many ranked entries to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopK {
    /// Keep everything.
    All,
    /// Keep at most this many entries.
    First(usize),
}

impl TopK {
    /// Number of entries kept out of `len` available.
    #[inline(always)]
    pub const fn kept(self, len: usize) -> usize {
        match self {
            TopK::All => len,
            TopK::First(k) => {
                if k < len {
                    k
                } else {
                    len
                }
            }
        }
    }
}

impl From<usize> for TopK {
    #[inline]
    fn from(k: usize) -> Self {
        TopK::First(k)
    }
}

/// Result of a top-K truncation.
///
/// Entries are sorted by count (descending), ties in first-seen order.
/// `distinct` is the number of distinct items that existed *before*
/// truncation, so callers can tell "top 20 of 3000" apart from "all 20".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranked<T> {
    entries: Vec<T>,
    distinct: usize,
}

impl<T> Default for Ranked<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            distinct: 0,
        }
    }
}

impl<T> Ranked<T> {
    /// Wraps already-sorted, already-truncated entries.
    ///
    /// `distinct` must be at least `entries.len()`.
    pub fn new(entries: Vec<T>, distinct: usize) -> Self {
        debug_assert!(distinct >= entries.len(), "ranked: distinct < kept");
        Self { entries, distinct }
    }

    /// Kept entries in rank order.
    #[inline(always)]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Consumes the result, returning the kept entries.
    #[inline]
    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    /// Number of distinct items before truncation.
    #[inline(always)]
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// Number of kept entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was counted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when truncation dropped at least one item.
    #[inline(always)]
    pub fn truncated(&self) -> bool {
        self.distinct > self.entries.len()
    }

    /// Iterates over the kept entries.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Re-truncates to the first `top_k` entries.
    ///
    /// Entries are already in rank order, so this is a prefix; `distinct`
    /// carries over unchanged.
    pub fn top(&self, top_k: TopK) -> Ranked<T>
    where
        T: Clone,
    {
        let kept = top_k.kept(self.entries.len());
        Self::new(self.entries[..kept].to_vec(), self.distinct)
    }
}

impl<'a, T> IntoIterator for &'a Ranked<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Error building a [`LengthRange`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Lower bound exceeds upper bound.
    #[error("invalid length range: min {min} > max {max}")]
    Inverted {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },
}

/// Inclusive `[min, max]` bound over record length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthRange {
    min: u32,
    max: u32,
}

impl LengthRange {
    /// Creates a range; fails when `min > max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range accepting every length.
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    /// Range with only a lower bound (the "minimum sentence length" slider).
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: u32::MAX }
    }

    /// Inclusive lower bound.
    #[inline(always)]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Inclusive upper bound.
    #[inline(always)]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Returns `true` if `length` lies within the range.
    #[inline(always)]
    pub const fn contains(self, length: u32) -> bool {
        self.min <= length && length <= self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == u32::MAX {
            write!(f, "[{}, ..]", self.min)
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}

/// One equal-width histogram bucket over record lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    /// Inclusive lower bound.
    pub lo: u32,
    /// Inclusive upper bound.
    pub hi: u32,
    /// Number of records whose length falls in `[lo, hi]`.
    pub count: usize,
}

impl LengthBucket {
    /// Chart label, `"lo-hi"` or just `"lo"` for single-value buckets.
    pub fn label(&self) -> String {
        if self.lo == self.hi {
            self.lo.to_string()
        } else {
            format!("{}-{}", self.lo, self.hi)
        }
    }
}

/// Descriptive statistics over record lengths.
///
/// Length fields are `None` for an empty corpus.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Number of records.
    pub records: usize,
    /// Arithmetic mean of lengths.
    pub mean_length: Option<f64>,
    /// Shortest length.
    pub min_length: Option<u32>,
    /// Longest length.
    pub max_length: Option<u32>,
}

impl CorpusSummary {
    /// Summarizes a sequence of record lengths in one pass.
    pub fn from_lengths<I>(lengths: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut records = 0usize;
        let mut sum = 0u64;
        let mut bounds: Option<(u32, u32)> = None;
        for length in lengths {
            records += 1;
            sum += u64::from(length);
            bounds = Some(match bounds {
                None => (length, length),
                Some((lo, hi)) => (lo.min(length), hi.max(length)),
            });
        }
        Self {
            records,
            mean_length: (records > 0).then(|| sum as f64 / records as f64),
            min_length: bounds.map(|(lo, _)| lo),
            max_length: bounds.map(|(_, hi)| hi),
        }
    }
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean_length, self.min_length, self.max_length) {
            (Some(mean), Some(min), Some(max)) => write!(
                f,
                "{} records, mean length {:.2}, shortest {}, longest {}",
                self.records, mean, min, max
            ),
            _ => write!(f, "{} records", self.records),
        }
    }
}

/// Errors that can occur while loading a corpus.
///
/// Every variant is terminal for the load attempt; callers keep their
/// previous corpus.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The configured text column is not in the header.
    #[error("missing text column {column:?} (available: {})", .available.join(", "))]
    MalformedInput {
        /// Requested column name.
        column: String,
        /// Header columns actually present.
        available: Vec<String>,
    },
    /// The text and length columns were given the same name.
    #[error("text and length columns must differ (both {column:?})")]
    ColumnConflict {
        /// The shared column name.
        column: String,
    },
    /// The header names the same column twice.
    #[error("duplicate column {column:?} in header")]
    DuplicateColumn {
        /// The repeated name.
        column: String,
    },
    /// The table has no data rows.
    #[error("input has no rows")]
    EmptyInput,
    /// A length cell is not a non-negative integer.
    #[error("row {row}: invalid length value {value:?}")]
    InvalidLength {
        /// 1-based data row number.
        row: usize,
        /// Offending cell content.
        value: String,
    },
    /// The input is not well-formed CSV.
    #[error("malformed csv: {message}")]
    Parse {
        /// Reader diagnostic.
        message: String,
    },
    /// The input could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
