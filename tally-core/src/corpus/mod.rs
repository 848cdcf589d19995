//! Corpus storage.
//!
//! A [`Corpus`] is an ordered list of [`Record`]s that share one [`Schema`].
//! Records keep every cell of their source row so that exports reproduce the
//! input losslessly; the text and length columns are located through the
//! schema.
//!
//! Record length is always the whitespace-token count of the raw text (see
//! [`token_length`]). A length column supplied by the input is trusted as-is.
//!
//! Filtering produces a new `Corpus` that shares the schema through an `Arc`,
//! so downstream stages work on an immutable snapshot.

mod builder;
mod cache;
mod export;
mod filter;
mod loader;

pub use builder::DatasetBuilder;
pub use cache::{CacheStats, LoaderCache};
pub use export::{write_csv, write_json, ExportError};
pub use loader::Loader;

use std::sync::Arc;

/// Canonical record length: number of whitespace-separated tokens in `text`.
///
/// Computed on the raw text, before normalization.
#[inline]
pub fn token_length(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Column layout shared by every record of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    text_column: usize,
    length_column: usize,
}

impl Schema {
    /// Creates a schema.
    ///
    /// Returns `None` when either index is out of bounds, both point at the
    /// same column, or a column name repeats.
    pub fn new(columns: Vec<String>, text_column: usize, length_column: usize) -> Option<Self> {
        if text_column >= columns.len()
            || length_column >= columns.len()
            || text_column == length_column
            || columns.iter().enumerate().any(|(i, c)| columns[..i].contains(c))
        {
            return None;
        }
        Some(Self {
            columns,
            text_column,
            length_column,
        })
    }

    /// Column names in input order.
    #[inline(always)]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the text column.
    #[inline(always)]
    pub fn text_column(&self) -> usize {
        self.text_column
    }

    /// Index of the length column.
    #[inline(always)]
    pub fn length_column(&self) -> usize {
        self.length_column
    }

    /// Name of the text column.
    #[inline]
    pub fn text_field(&self) -> &str {
        &self.columns[self.text_column]
    }

    /// Name of the length column.
    #[inline]
    pub fn length_field(&self) -> &str {
        &self.columns[self.length_column]
    }

    /// Number of columns.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// One row of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Box<[String]>,
    length: u32,
}

impl Record {
    /// Creates a record from its cells and parsed length.
    ///
    /// The caller guarantees `fields.len()` matches the schema width.
    pub(crate) fn new(fields: Vec<String>, length: u32) -> Self {
        Self {
            fields: fields.into_boxed_slice(),
            length,
        }
    }

    /// Record length (token count).
    #[inline(always)]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// All cells in schema order.
    #[inline(always)]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Cell at `column`, if any.
    #[inline]
    pub fn field(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Ordered collection of records under analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl Corpus {
    /// Creates a corpus. Every record must match the schema width.
    pub(crate) fn new(schema: Arc<Schema>, records: Vec<Record>) -> Self {
        debug_assert!(
            records.iter().all(|r| r.fields.len() == schema.width()),
            "corpus: record width does not match schema"
        );
        Self { schema, records }
    }

    /// A corpus with the same schema and the given records.
    pub(crate) fn with_records(&self, records: Vec<Record>) -> Self {
        Self::new(Arc::clone(&self.schema), records)
    }

    /// The shared schema.
    #[inline(always)]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All records in order.
    #[inline(always)]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the corpus holds no records.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Text of every record, in order. This is the text accessor the
    /// statistics stages consume.
    pub fn texts(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        let column = self.schema.text_column;
        self.records
            .iter()
            .map(move |r| r.field(column).unwrap_or_default())
    }

    /// Length of every record, in order.
    pub fn lengths(&self) -> impl Iterator<Item = u32> + Clone + '_ {
        self.records.iter().map(Record::length)
    }

    /// `(min, max)` over record lengths, or `None` when empty.
    ///
    /// These are the bounds a length slider should offer.
    pub fn length_bounds(&self) -> Option<(u32, u32)> {
        let mut lengths = self.lengths();
        let first = lengths.next()?;
        Some(lengths.fold((first, first), |(lo, hi), l| (lo.min(l), hi.max(l))))
    }

    /// The first `n` records (the dataset preview).
    #[inline]
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn token_length_counts_whitespace_runs() {
        assert_eq!(token_length("the cat  sat"), 3);
        assert_eq!(token_length("  "), 0);
        assert_eq!(token_length("one,two three."), 2);
    }

    #[test]
    fn schema_rejects_bad_indices() {
        let cols = || vec!["a".to_string(), "b".to_string()];
        assert!(Schema::new(cols(), 0, 1).is_some());
        assert!(Schema::new(cols(), 0, 0).is_none());
        assert!(Schema::new(cols(), 2, 1).is_none());
        assert!(Schema::new(vec!["a".into(), "b".into(), "a".into()], 0, 1).is_none());
    }

    #[test]
    fn texts_follow_text_column() {
        let c = corpus(&[("first one", 2), ("second", 1)]);
        assert_eq!(c.texts().collect::<Vec<_>>(), ["first one", "second"]);
        assert_eq!(c.schema().text_field(), "sentence");
        assert_eq!(c.schema().length_field(), "length");
    }

    #[test]
    fn length_bounds() {
        let c = corpus(&[("a", 3), ("b", 10), ("c", 5)]);
        assert_eq!(c.length_bounds(), Some((3, 10)));
        assert_eq!(corpus(&[]).length_bounds(), None);
    }

    #[test]
    fn head_clamps() {
        let c = corpus(&[("a", 1), ("b", 1)]);
        assert_eq!(c.head(5).len(), 2);
        assert_eq!(c.head(1).len(), 1);
        assert!(c.head(0).is_empty());
    }
}
