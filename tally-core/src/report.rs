//! One pass of the statistics pipeline over a corpus snapshot.

use crate::analyzer::Analyzer;
use crate::corpus::Corpus;
use crate::presentation::ChartTable;
use crate::stats::{length_histogram, top_bigrams, word_frequencies};
use core::fmt;
use serde::Serialize;
use tally_types::{CorpusSummary, ExplorerConfig, FrequencyEntry, LengthRange, Ranked, TopK};

/// Everything the dashboard shows for one filter setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Filter the report was computed under.
    pub range: LengthRange,
    /// Count and length statistics of the filtered records.
    pub summary: CorpusSummary,
    /// Most frequent words.
    pub top_words: ChartTable,
    /// Most frequent bigrams.
    pub top_bigrams: ChartTable,
    /// Length histogram.
    pub length_distribution: ChartTable,
    /// Length of every record in order.
    pub length_series: ChartTable,
    /// Full word weights, present only when the word cloud is enabled.
    pub word_cloud: Option<Ranked<FrequencyEntry>>,
}

impl Report {
    /// Computes every statistic over `corpus`, which is already filtered by `range`.
    pub fn build(
        corpus: &Corpus,
        range: LengthRange,
        config: &ExplorerConfig,
        analyzer: &Analyzer,
    ) -> Self {
        let (top_words, word_cloud) = if config.enable_word_cloud {
            let all = word_frequencies(corpus.texts(), analyzer, TopK::All);
            (all.top(config.word_limit()), Some(all))
        } else {
            (
                word_frequencies(corpus.texts(), analyzer, config.word_limit()),
                None,
            )
        };
        let bigrams = top_bigrams(corpus.texts(), analyzer, config.bigram_limit());
        let buckets = length_histogram(corpus, config.length_bins);

        Self {
            range,
            summary: corpus.summary(),
            top_words: ChartTable::from_frequencies(&top_words),
            top_bigrams: ChartTable::from_bigrams(&bigrams),
            length_distribution: ChartTable::from_buckets(&buckets),
            length_series: ChartTable::from_lengths(corpus),
            word_cloud,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records with length in {}", self.range)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "== Top words ==")?;
        write!(f, "{}", self.top_words)?;
        writeln!(f)?;
        writeln!(f, "== Top bigrams ==")?;
        write!(f, "{}", self.top_bigrams)?;
        writeln!(f)?;
        writeln!(f, "== Length distribution ==")?;
        write!(f, "{}", self.length_distribution)?;
        if let Some(cloud) = &self.word_cloud {
            writeln!(f)?;
            writeln!(f, "== Word cloud ==")?;
            let words: Vec<&str> = cloud.iter().map(|e| e.token.as_str()).collect();
            writeln!(f, "{} distinct words: {}", cloud.distinct(), words.join(" "))?;
        }
        Ok(())
    }
}
