//! CSV loader.

use super::{token_length, Corpus, Record, Schema};
use rustc_hash::FxHashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tally_types::{ExplorerConfig, LoadError};

/// Parses CSV input into a [`Corpus`].
///
/// The first row is the header. `text_field` must name one of its columns.
/// If `length_field` is absent, a column of that name is appended and filled
/// with [`token_length`] of each text; empty length cells are derived the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Loader {
    text_field: String,
    length_field: String,
}

impl Loader {
    /// Creates a loader for the given column names.
    pub fn new(text_field: impl Into<String>, length_field: impl Into<String>) -> Self {
        Self {
            text_field: text_field.into(),
            length_field: length_field.into(),
        }
    }

    /// Creates a loader from the explorer configuration.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.text_field.clone(), config.length_field.clone())
    }

    /// Column holding the text.
    #[inline(always)]
    pub fn text_field(&self) -> &str {
        &self.text_field
    }

    /// Column holding the length.
    #[inline(always)]
    pub fn length_field(&self) -> &str {
        &self.length_field
    }

    /// Loads a CSV file.
    pub fn load_path(&self, path: &Path) -> Result<Corpus, LoadError> {
        let file = std::fs::File::open(path)?;
        self.load_reader(std::io::BufReader::new(file))
    }

    /// Loads CSV from an in-memory buffer.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Corpus, LoadError> {
        self.load_reader(bytes)
    }

    /// Loads CSV from any reader.
    ///
    /// # Errors
    ///
    /// - [`LoadError::ColumnConflict`] when text and length share a name
    /// - [`LoadError::EmptyInput`] when there is no header or no data row
    /// - [`LoadError::DuplicateColumn`] when a header name repeats
    /// - [`LoadError::MalformedInput`] when `text_field` is not a column
    /// - [`LoadError::InvalidLength`] when a length cell is not a `u32`
    /// - [`LoadError::Parse`] for ragged rows or invalid UTF-8
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Corpus, LoadError> {
        if self.text_field == self.length_field {
            return Err(LoadError::ColumnConflict {
                column: self.text_field.clone(),
            });
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?.clone();
        if headers.is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let mut seen = FxHashSet::default();
        if let Some(dup) = headers.iter().find(|name| !seen.insert(*name)) {
            return Err(LoadError::DuplicateColumn {
                column: dup.to_owned(),
            });
        }

        let mut columns: Vec<String> = headers.iter().map(str::to_owned).collect();
        let text_column = columns
            .iter()
            .position(|c| *c == self.text_field)
            .ok_or_else(|| LoadError::MalformedInput {
                column: self.text_field.clone(),
                available: columns.clone(),
            })?;

        let (length_column, derived) = match columns.iter().position(|c| *c == self.length_field) {
            Some(i) => (i, false),
            None => {
                columns.push(self.length_field.clone());
                (columns.len() - 1, true)
            }
        };

        let mut records = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let row = row.map_err(csv_error)?;
            let mut fields: Vec<String> = row.iter().map(str::to_owned).collect();
            let text = fields[text_column].as_str();

            let length = if derived {
                let length = token_length(text);
                fields.push(length.to_string());
                length
            } else {
                let cell = fields[length_column].trim();
                if cell.is_empty() {
                    let length = token_length(text);
                    fields[length_column] = length.to_string();
                    length
                } else {
                    cell.parse::<u32>().map_err(|_| LoadError::InvalidLength {
                        row: i + 1,
                        value: fields[length_column].clone(),
                    })?
                }
            };

            records.push(Record::new(fields, length));
        }

        if records.is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let schema = Schema::new(columns, text_column, length_column).ok_or_else(|| {
            LoadError::ColumnConflict {
                column: self.length_field.clone(),
            }
        })?;

        log::info!(
            "loaded {} records ({} columns, text {:?}, length {:?}{})",
            records.len(),
            schema.width(),
            schema.text_field(),
            schema.length_field(),
            if derived { ", derived" } else { "" }
        );

        Ok(Corpus::new(Arc::new(schema), records))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

fn csv_error(err: csv::Error) -> LoadError {
    if !err.is_io_error() {
        return LoadError::Parse {
            message: err.to_string(),
        };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(e) => LoadError::Io(e),
        kind => LoadError::Parse {
            message: format!("{kind:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Corpus, LoadError> {
        Loader::default().load_bytes(csv.as_bytes())
    }

    #[test]
    fn reads_existing_length_column() {
        let c = load("sentence,length\nọma ẹfu,2\nabọ,7\n").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.lengths().collect::<Vec<_>>(), [2, 7]);
        assert_eq!(c.schema().columns(), ["sentence", "length"]);
    }

    #[test]
    fn derives_missing_length_from_tokens() {
        let c = load("sentence\nthe cat sat\n\"one, two\"\n").unwrap();
        assert_eq!(c.lengths().collect::<Vec<_>>(), [3, 2]);
        assert_eq!(c.schema().columns(), ["sentence", "length"]);
        assert_eq!(c.records()[0].fields(), ["the cat sat", "3"]);
    }

    #[test]
    fn derives_empty_length_cells() {
        let c = load("length,sentence\n,a b c d\n9,x\n").unwrap();
        assert_eq!(c.lengths().collect::<Vec<_>>(), [4, 9]);
        assert_eq!(c.records()[0].field(0), Some("4"));
    }

    #[test]
    fn missing_text_column_is_malformed() {
        let err = load("text,length\nhello,1\n").unwrap_err();
        match err {
            LoadError::MalformedInput { column, available } => {
                assert_eq!(column, "sentence");
                assert_eq!(available, ["text", "length"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(load("sentence,length\n"), Err(LoadError::EmptyInput)));
    }

    #[test]
    fn no_content_is_empty() {
        assert!(matches!(load(""), Err(LoadError::EmptyInput)));
    }

    #[test]
    fn non_numeric_length_rejected() {
        let err = load("sentence,length\nok,2\nbad,two\n").unwrap_err();
        match err {
            LoadError::InvalidLength { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "two");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_parse_errors() {
        let err = load("sentence,length\na b,2,extra\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn custom_text_column() {
        let loader = Loader::new("body", "length");
        let c = loader
            .load_bytes(b"id,body\n1,hello there\n2,hi\n")
            .unwrap();
        assert_eq!(c.texts().collect::<Vec<_>>(), ["hello there", "hi"]);
        assert_eq!(c.schema().columns(), ["id", "body", "length"]);
    }

    #[test]
    fn same_text_and_length_column_is_a_conflict() {
        let err = Loader::new("length", "length")
            .load_bytes(b"sentence,length\nthe cat,2\n")
            .unwrap_err();
        match err {
            LoadError::ColumnConflict { column } => assert_eq!(column, "length"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn repeated_header_names_rejected() {
        let err = load("sentence,note,note\nab cd,x,y\n").unwrap_err();
        match err {
            LoadError::DuplicateColumn { column } => assert_eq!(column, "note"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Loader::default()
            .load_path(Path::new("/nonexistent/tally/input.csv"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
