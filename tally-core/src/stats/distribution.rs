//! Length distribution.
//!
//! Equal-width integer buckets spanning `[min, max]` of the record lengths.
//! With `span = max - min + 1`, every bucket is `ceil(span / bins)` wide and
//! the last one is clipped at `max`. Empty buckets are kept so the chart's
//! x-axis stays continuous.

use crate::corpus::Corpus;
use tally_types::LengthBucket;

/// Buckets the corpus by record length.
///
/// An empty corpus yields no buckets. `bins == 0` is treated as 1.
pub fn length_histogram(corpus: &Corpus, bins: usize) -> Vec<LengthBucket> {
    let Some((min, max)) = corpus.length_bounds() else {
        return Vec::new();
    };

    let span = u64::from(max - min) + 1;
    let bins = (bins.max(1) as u64).min(span);
    let width = span.div_ceil(bins);
    let n = span.div_ceil(width);

    let mut buckets: Vec<LengthBucket> = (0..n)
        .map(|i| {
            let lo = u64::from(min) + i * width;
            let hi = (lo + width - 1).min(u64::from(max));
            LengthBucket {
                lo: lo as u32,
                hi: hi as u32,
                count: 0,
            }
        })
        .collect();

    for length in corpus.lengths() {
        let i = (u64::from(length - min) / width) as usize;
        buckets[i].count += 1;
    }

    log::debug!(
        "length histogram: {} buckets of width {} over [{}, {}]",
        buckets.len(),
        width,
        min,
        max
    );
    buckets
}
