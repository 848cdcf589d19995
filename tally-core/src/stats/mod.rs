//! Corpus statistics.
//!
//! Every stage here reads an immutable corpus (or its texts) and returns
//! fresh values; nothing is cached between calls.
//!
//! - [`word_frequencies`] / [`count_tokens`]: exact token counts, top-K
//! - [`top_bigrams`]: adjacent token pairs within each record, top-K
//! - [`length_histogram`]: equal-width length buckets
//! - [`Corpus::summary`](crate::corpus::Corpus::summary): count and length stats

mod bigrams;
mod counter;
mod distribution;
mod frequency;
mod summary;

pub use bigrams::top_bigrams;
pub use counter::FrequencyCounter;
pub use distribution::length_histogram;
pub use frequency::{count_tokens, word_frequencies};
