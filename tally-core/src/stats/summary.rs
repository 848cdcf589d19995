//! Corpus summary.

use crate::corpus::Corpus;
use tally_types::CorpusSummary;

impl Corpus {
    /// Returns record count and length statistics.
    pub fn summary(&self) -> CorpusSummary {
        CorpusSummary::from_lengths(self.lengths())
    }
}
