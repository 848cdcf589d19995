//! CSV and JSON downloads of a corpus.

use super::{Corpus, Record, Schema};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;

/// Errors raised while writing an export.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// CSV writer failure.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    /// JSON writer failure.
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Underlying sink failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes the corpus as CSV with its schema as the header row.
pub fn write_csv<W: Write>(corpus: &Corpus, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(corpus.schema().columns())?;
    for record in corpus.records() {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the corpus as a JSON array of objects, one per record.
///
/// Keys follow schema order. The length column is a number; every other
/// value is a string.
pub fn write_json<W: Write>(corpus: &Corpus, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, &JsonRecords(corpus))?;
    Ok(())
}

struct JsonRecords<'a>(&'a Corpus);

impl Serialize for JsonRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let schema = self.0.schema();
        serializer.collect_seq(
            self.0
                .records()
                .iter()
                .map(|record| JsonRecord { schema, record }),
        )
    }
}

struct JsonRecord<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.width()))?;
        for (i, (name, value)) in self
            .schema
            .columns()
            .iter()
            .zip(self.record.fields())
            .enumerate()
        {
            if i == self.schema.length_column() {
                map.serialize_entry(name, &self.record.length())?;
            } else {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}
