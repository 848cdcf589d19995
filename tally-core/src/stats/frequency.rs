//! Word frequencies.

use super::counter::FrequencyCounter;
use crate::analyzer::Analyzer;
use tally_types::{FrequencyEntry, Ranked, TopK};

/// Counts a flat token sequence and keeps the top `top_k`.
///
/// Empty input yields an empty result.
///
/// ```
/// use tally_core::analyzer::Analyzer;
/// use tally_core::stats::count_tokens;
/// use tally_types::TopK;
///
/// let tokens = Analyzer::default().analyze("The cat sat. The dog sat!");
/// let top = count_tokens(&tokens, TopK::First(2));
///
/// let pairs: Vec<_> = top.iter().map(|e| (e.token.as_str(), e.count)).collect();
/// assert_eq!(pairs, [("the", 2), ("sat", 2)]);
/// ```
pub fn count_tokens<'a, I>(tokens: I, top_k: TopK) -> Ranked<FrequencyEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = FrequencyCounter::new();
    counter.extend(tokens);
    counter.into_ranked(top_k, FrequencyEntry::new)
}

/// Tokenizes every text and counts the tokens across all of them.
pub fn word_frequencies<'a, I>(texts: I, analyzer: &Analyzer, top_k: TopK) -> Ranked<FrequencyEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = FrequencyCounter::new();
    let mut buf = String::new();
    for text in texts {
        counter.extend(analyzer.tokens_in(text, &mut buf));
    }
    log::debug!(
        "word frequencies: {} tokens, {} distinct",
        counter.total(),
        counter.distinct()
    );
    counter.into_ranked(top_k, FrequencyEntry::new)
}
