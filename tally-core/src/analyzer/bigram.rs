//! Bigram extraction module.
//!
//! Bigrams are pairs of adjacent tokens inside one text. Extraction never
//! looks past the token slice it is given, so a caller that feeds one record
//! at a time can never produce a pair spanning two records.

/// Extracts bigrams from a token slice using a sliding window.
///
/// For fewer than 2 tokens, no bigrams are emitted.
/// For N tokens, exactly N-1 bigrams are emitted, left to right.
///
/// # Example
///
/// ```
/// use tally_core::analyzer::bigram::extract_bigrams;
///
/// let mut pairs = Vec::new();
/// extract_bigrams(&["the", "cat", "sat"], |a, b| pairs.push((a, b)));
///
/// assert_eq!(pairs, [("the", "cat"), ("cat", "sat")]);
/// ```
#[inline(always)]
pub fn extract_bigrams<'t, F>(tokens: &[&'t str], mut callback: F)
where
    F: FnMut(&'t str, &'t str),
{
    for window in tokens.windows(2) {
        callback(window[0], window[1]);
    }
}

/// Writes the space-joined form of a bigram into `out`, replacing its contents.
#[inline]
pub fn join_into(first: &str, second: &str, out: &mut String) {
    out.clear();
    out.reserve(first.len() + 1 + second.len());
    out.push_str(first);
    out.push(' ');
    out.push_str(second);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_basic() {
        let mut pairs = Vec::new();
        extract_bigrams(&["a1", "b2", "c3", "d4"], |a, b| pairs.push((a, b)));
        assert_eq!(pairs, [("a1", "b2"), ("b2", "c3"), ("c3", "d4")]);
    }

    #[test]
    fn extract_short_input() {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        extract_bigrams(&[], |a, b| pairs.push((a, b)));
        assert!(pairs.is_empty());

        extract_bigrams(&["alone"], |a, b| pairs.push((a, b)));
        assert!(pairs.is_empty());
    }

    #[test]
    fn extract_exactly_two() {
        let mut pairs = Vec::new();
        extract_bigrams(&["ọma", "ẹfu"], |a, b| pairs.push((a, b)));
        assert_eq!(pairs, [("ọma", "ẹfu")]);
    }

    #[test]
    fn join_replaces_buffer() {
        let mut buf = String::from("leftover");
        join_into("the", "cat", &mut buf);
        assert_eq!(buf, "the cat");
    }
}
