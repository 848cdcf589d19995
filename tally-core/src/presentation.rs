//! Chart-ready tables.
//!
//! Reshapes statistics into `(label, value)` rows with named columns, the
//! form a bar or line chart consumes. No computation happens here: row order
//! is the order of the input, and values are copied through unchanged.

use crate::corpus::Corpus;
use core::fmt;
use serde::Serialize;
use tally_types::{BigramEntry, FrequencyEntry, LengthBucket, Ranked};

/// Widest bar drawn by the text rendering.
const BAR_WIDTH: u64 = 40;

/// One chart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    /// Category or x-axis label.
    pub label: String,
    /// Bar height.
    pub value: u64,
}

/// A two-column table for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTable {
    /// Header of the label column.
    pub label_column: &'static str,
    /// Header of the value column.
    pub value_column: &'static str,
    /// Rows in display order.
    pub rows: Vec<ChartRow>,
    /// `true` when the rows are a top-K cut of a larger result.
    pub truncated: bool,
}

impl ChartTable {
    fn new(label_column: &'static str, value_column: &'static str) -> Self {
        Self {
            label_column,
            value_column,
            rows: Vec::new(),
            truncated: false,
        }
    }

    /// `word` / `frequency` table from ranked word counts.
    pub fn from_frequencies(ranked: &Ranked<FrequencyEntry>) -> Self {
        Self {
            rows: ranked
                .iter()
                .map(|e| ChartRow {
                    label: e.token.clone(),
                    value: e.count,
                })
                .collect(),
            truncated: ranked.truncated(),
            ..Self::new("word", "frequency")
        }
    }

    /// `bigram` / `frequency` table from ranked bigram counts.
    pub fn from_bigrams(ranked: &Ranked<BigramEntry>) -> Self {
        Self {
            rows: ranked
                .iter()
                .map(|e| ChartRow {
                    label: e.bigram.clone(),
                    value: e.count,
                })
                .collect(),
            truncated: ranked.truncated(),
            ..Self::new("bigram", "frequency")
        }
    }

    /// `length` / `sentences` table from histogram buckets.
    pub fn from_buckets(buckets: &[LengthBucket]) -> Self {
        Self {
            rows: buckets
                .iter()
                .map(|b| ChartRow {
                    label: b.label(),
                    value: b.count as u64,
                })
                .collect(),
            ..Self::new("length", "sentences")
        }
    }

    /// `row` / `length` series, one row per record keyed by its 0-based position.
    pub fn from_lengths(corpus: &Corpus) -> Self {
        Self {
            rows: corpus
                .lengths()
                .enumerate()
                .map(|(i, length)| ChartRow {
                    label: i.to_string(),
                    value: u64::from(length),
                })
                .collect(),
            ..Self::new("row", "length")
        }
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when there is nothing to plot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ChartTable {
    /// Renders a horizontal text bar chart, or a "not enough data" line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "(not enough data)");
        }

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .chain(Some(self.label_column.len()))
            .max()
            .unwrap_or(0);
        let peak = self.rows.iter().map(|r| r.value).max().unwrap_or(0).max(1);

        writeln!(
            f,
            "{:<label_width$}  {}",
            self.label_column, self.value_column
        )?;
        for row in &self.rows {
            let bar = (row.value * BAR_WIDTH).div_ceil(peak) as usize;
            writeln!(
                f,
                "{:<label_width$}  {:>6}  {}",
                row.label,
                row.value,
                "#".repeat(bar)
            )?;
        }
        if self.truncated {
            writeln!(f, "(top {} shown)", self.rows.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::test_support::corpus;

    #[test]
    fn frequencies_keep_order_and_columns() {
        let ranked = Ranked::new(
            vec![FrequencyEntry::new("the", 2), FrequencyEntry::new("sat", 2)],
            4,
        );
        let t = ChartTable::from_frequencies(&ranked);
        assert_eq!((t.label_column, t.value_column), ("word", "frequency"));
        assert_eq!(
            t.rows,
            [
                ChartRow { label: "the".into(), value: 2 },
                ChartRow { label: "sat".into(), value: 2 },
            ]
        );
        assert!(t.truncated);
    }

    #[test]
    fn bigrams_table() {
        let ranked = Ranked::new(vec![BigramEntry::new("the cat", 3)], 1);
        let t = ChartTable::from_bigrams(&ranked);
        assert_eq!(t.label_column, "bigram");
        assert_eq!(t.rows[0].label, "the cat");
        assert!(!t.truncated);
    }

    #[test]
    fn buckets_table_uses_labels() {
        let t = ChartTable::from_buckets(&[
            LengthBucket { lo: 1, hi: 3, count: 4 },
            LengthBucket { lo: 4, hi: 4, count: 0 },
        ]);
        assert_eq!((t.label_column, t.value_column), ("length", "sentences"));
        let rows: Vec<_> = t.rows.iter().map(|r| (r.label.as_str(), r.value)).collect();
        assert_eq!(rows, [("1-3", 4), ("4", 0)]);
    }

    #[test]
    fn length_series_is_positional() {
        let c = corpus(&[("a", 7), ("b", 2)]);
        let t = ChartTable::from_lengths(&c);
        assert_eq!((t.label_column, t.value_column), ("row", "length"));
        let rows: Vec<_> = t.rows.iter().map(|r| (r.label.as_str(), r.value)).collect();
        assert_eq!(rows, [("0", 7), ("1", 2)]);
    }

    #[test]
    fn empty_input_is_empty_table() {
        let t = ChartTable::from_frequencies(&Ranked::default());
        assert!(t.is_empty());
        assert_eq!(t.to_string(), "(not enough data)\n");
        assert!(ChartTable::from_lengths(&corpus(&[])).is_empty());
    }

    #[test]
    fn text_rendering_scales_bars() {
        let ranked = Ranked::new(
            vec![FrequencyEntry::new("ana", 4), FrequencyEntry::new("bo", 2)],
            3,
        );
        let out = ChartTable::from_frequencies(&ranked).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "word  frequency");
        assert!(lines[1].starts_with("ana        4  "));
        assert!(lines[1].ends_with(&"#".repeat(40)));
        assert!(lines[2].ends_with(&format!(" {}", "#".repeat(20))));
        assert_eq!(lines[3], "(top 2 shown)");
    }

    #[test]
    fn serializes_for_ui() {
        let t = ChartTable::from_buckets(&[LengthBucket { lo: 2, hi: 2, count: 1 }]);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "label_column": "length",
                "value_column": "sentences",
                "rows": [{ "label": "2", "value": 1 }],
                "truncated": false
            })
        );
    }
}
