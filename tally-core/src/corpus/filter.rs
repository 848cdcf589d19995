//! Length-range selection.

use super::Corpus;
use tally_types::LengthRange;

impl Corpus {
    /// Returns the records whose length lies in `range` (inclusive), in order.
    ///
    /// An empty result is a valid corpus, not an error.
    pub fn filter(&self, range: LengthRange) -> Corpus {
        let records = self
            .records()
            .iter()
            .filter(|r| range.contains(r.length()))
            .cloned()
            .collect::<Vec<_>>();
        log::debug!(
            "filter {}: kept {} of {} records",
            range,
            records.len(),
            self.len()
        );
        self.with_records(records)
    }
}

#[cfg(test)]
mod tests {
    use crate::corpus::test_support::corpus;
    use tally_types::LengthRange;

    #[test]
    fn scenario_inclusive_range() {
        let c = corpus(&[("a", 3), ("b", 5), ("c", 5), ("d", 8), ("e", 10)]);
        let out = c.filter(LengthRange::new(5, 8).unwrap());
        assert_eq!(out.len(), 3);
        assert_eq!(out.lengths().collect::<Vec<_>>(), [5, 5, 8]);
    }

    #[test]
    fn keeps_exactly_the_matching_records() {
        let rows: Vec<(String, u32)> = (0..40u32).map(|i| (format!("row {i}"), (i * 7) % 13)).collect();
        let refs: Vec<(&str, u32)> = rows.iter().map(|(t, l)| (t.as_str(), *l)).collect();
        let c = corpus(&refs);

        for (a, b) in [(0, 0), (2, 6), (5, 12), (13, 20), (0, u32::MAX)] {
            let range = LengthRange::new(a, b).unwrap();
            let filtered = c.filter(range);
            let kept: Vec<&str> = filtered.texts().collect();
            let expected: Vec<&str> = refs
                .iter()
                .filter(|(_, l)| a <= *l && *l <= b)
                .map(|(t, _)| *t)
                .collect();
            assert_eq!(kept, expected, "range [{a}, {b}]");
        }
    }

    #[test]
    fn empty_result_is_valid() {
        let c = corpus(&[("a", 3)]);
        let out = c.filter(LengthRange::new(4, 9).unwrap());
        assert!(out.is_empty());
        assert_eq!(out.schema(), c.schema());
    }

    #[test]
    fn minimum_only_filter() {
        let c = corpus(&[("a", 1), ("b", 4), ("c", 9)]);
        assert_eq!(c.filter(LengthRange::at_least(4)).len(), 2);
    }

    #[test]
    fn preserves_all_cells() {
        let c = corpus(&[("keep me", 2)]);
        let out = c.filter(LengthRange::full());
        assert_eq!(out.records()[0].fields(), ["keep me", "2"]);
    }
}
