//! Bigram frequencies.

use super::counter::FrequencyCounter;
use crate::analyzer::bigram::{extract_bigrams, join_into};
use crate::analyzer::Analyzer;
use smallvec::SmallVec;
use tally_types::{BigramEntry, Ranked, TopK};

/// Most records are short sentences; longer ones spill to the heap.
type TokenBuf<'a> = SmallVec<[&'a str; 32]>;

/// Counts adjacent token pairs across all texts and keeps the top `top_k`.
///
/// Pairs are formed inside one text only; the last token of one text and the
/// first token of the next never form a bigram.
pub fn top_bigrams<'a, I>(texts: I, analyzer: &Analyzer, top_k: TopK) -> Ranked<BigramEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = FrequencyCounter::new();
    let mut normalized = String::new();
    let mut key = String::new();

    for text in texts {
        let tokens: TokenBuf<'_> = analyzer.tokens_in(text, &mut normalized).collect();
        extract_bigrams(&tokens, |first, second| {
            join_into(first, second, &mut key);
            counter.add(&key);
        });
    }

    log::debug!(
        "bigrams: {} pairs, {} distinct",
        counter.total(),
        counter.distinct()
    );
    counter.into_ranked(top_k, BigramEntry::new)
}
