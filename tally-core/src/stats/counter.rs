//! Exact occurrence counting with first-seen tie-breaking.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use tally_types::{Count, Ranked, TopK};

#[derive(Debug, Clone, Copy)]
struct Slot {
    first_seen: usize,
    count: Count,
}

/// Counts string occurrences and ranks them.
///
/// Ranking is by count descending; equal counts keep first-seen order.
/// Both rules together form a total order, so the output never depends on
/// hash iteration order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    slots: FxHashMap<String, Slot>,
    total: Count,
}

impl FrequencyCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `item`.
    #[inline]
    pub fn add(&mut self, item: &str) {
        self.total += 1;
        if let Some(slot) = self.slots.get_mut(item) {
            slot.count += 1;
            return;
        }
        let first_seen = self.slots.len();
        self.slots.insert(
            item.to_owned(),
            Slot {
                first_seen,
                count: 1,
            },
        );
    }

    /// Records one occurrence of every item.
    pub fn extend<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Number of occurrences recorded.
    #[inline(always)]
    pub fn total(&self) -> Count {
        self.total
    }

    /// Number of distinct items.
    #[inline(always)]
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    /// Count for one item (0 if never seen).
    #[inline]
    pub fn get(&self, item: &str) -> Count {
        self.slots.get(item).map_or(0, |s| s.count)
    }

    /// Ranks the counted items and keeps the top `top_k`.
    ///
    /// `make` builds the output entry from `(item, count)`.
    pub fn into_ranked<T, F>(self, top_k: TopK, mut make: F) -> Ranked<T>
    where
        F: FnMut(String, Count) -> T,
    {
        let distinct = self.slots.len();
        let mut items: Vec<(String, Slot)> = self.slots.into_iter().collect();

        let kept = top_k.kept(items.len());
        if kept < items.len() {
            if kept == 0 {
                items.clear();
            } else {
                items.select_nth_unstable_by(kept - 1, rank_order);
                items.truncate(kept);
            }
        }
        items.sort_unstable_by(rank_order);

        let entries = items
            .into_iter()
            .map(|(item, slot)| make(item, slot.count))
            .collect();
        Ranked::new(entries, distinct)
    }
}

#[inline]
fn rank_order(a: &(String, Slot), b: &(String, Slot)) -> Ordering {
    b.1.count
        .cmp(&a.1.count)
        .then_with(|| a.1.first_seen.cmp(&b.1.first_seen))
}
