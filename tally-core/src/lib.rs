//! Text-statistics pipeline for sentence corpora.
//!
//! Data flows one way:
//!
//! ```text
//! CSV bytes -> Loader -> Corpus -> filter(range) -> Analyzer
//!     -> word_frequencies / top_bigrams / length_histogram -> ChartTable
//! ```
//!
//! [`Session`] ties the stages together and keeps the loaded corpus between
//! filter changes; [`Report`] is what one filter setting produces.
//!
//! ```
//! use tally_core::Session;
//! use tally_types::{ExplorerConfig, LengthRange};
//!
//! let mut session = Session::new(ExplorerConfig::default()).unwrap();
//! session.load(&b"sentence\nThe cat sat.\nThe dog sat!\n"[..]).unwrap();
//!
//! let report = session.report(LengthRange::full()).unwrap();
//! assert_eq!(report.summary.records, 2);
//! assert_eq!(report.top_words.rows[0].label, "the");
//! ```

pub mod analyzer;
pub mod corpus;
pub mod presentation;
pub mod report;
pub mod session;
pub mod stats;

pub use analyzer::Analyzer;
pub use corpus::{Corpus, DatasetBuilder, Loader, Record, Schema};
pub use presentation::{ChartRow, ChartTable};
pub use report::Report;
pub use session::{Session, SessionError};
