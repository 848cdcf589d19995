//! Streaming Tokenizer Module
//!
//! Splits normalized text into word tokens for frequency analysis. It's the
//! second stage of the analyzer, taking clean output from the
//! [`TextNormalizer`](super::TextNormalizer) and breaking it into countable
//! units.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat a sat"`, it yields each word that
//! has at least `min_chars` characters:
//!
//! ```ignore
//! "the", "cat", "sat"   // "a" is shorter than 2 characters and dropped
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: tokens are slices of the normalized string
//! - **Lazy and Restartable**: [`Tokens`] is a `Clone` iterator; clone it or
//!   call [`Tokenizer::tokens`] again to replay the same sequence
//! - **Fast**: `memchr` scan for ASCII space (0x20)
//! - **Character-Aware Length**: the minimum is counted in `char`s, so a
//!   two-letter word with diacritics (`"ọn"`) is kept
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input:
//! - All lowercase, punctuation already removed
//! - Words separated by exactly one ASCII space
//! - No leading or trailing whitespace
//!
//! Violations trip a debug assertion.

use memchr::memchr;
use tally_types::config::DEFAULT_MIN_TOKEN_CHARS;

/// Streaming tokenizer - splits normalized text into tokens.
///
/// ## Example
///
/// ```
/// use tally_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// let tokens: Vec<&str> = tokenizer.tokens("the cat a sat").collect();
/// assert_eq!(tokens, ["the", "cat", "sat"]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Tokenizer {
    min_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_CHARS)
    }
}

impl Tokenizer {
    /// Creates a tokenizer that drops tokens shorter than `min_chars` characters.
    #[inline]
    pub const fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Returns a lazy iterator over the tokens of `normalized`.
    #[inline]
    pub fn tokens<'n>(&self, normalized: &'n str) -> Tokens<'n> {
        debug_assert!(
            !normalized.starts_with(' '),
            "tokenizer: leading whitespace (normalizer contract violated)"
        );
        debug_assert!(
            !normalized.ends_with(' '),
            "tokenizer: trailing whitespace (normalizer contract violated)"
        );
        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces (normalizer contract violated)"
        );

        Tokens {
            rest: normalized,
            min_chars: self.min_chars,
        }
    }

}

/// Iterator over the tokens of one normalized string.
#[derive(Debug, Clone)]
pub struct Tokens<'n> {
    rest: &'n str,
    min_chars: usize,
}

impl<'n> Iterator for Tokens<'n> {
    type Item = &'n str;

    fn next(&mut self) -> Option<&'n str> {
        while !self.rest.is_empty() {
            let bytes = self.rest.as_bytes();
            // Splitting on ASCII space (never a UTF-8 continuation byte) keeps
            // both halves on char boundaries.
            let text = match memchr(b' ', bytes) {
                Some(i) => {
                    let text = &self.rest[..i];
                    self.rest = &self.rest[i + 1..];
                    text
                }
                None => core::mem::take(&mut self.rest),
            };

            if long_enough(text, self.min_chars) {
                return Some(text);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.rest.len() / 2 + 1))
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

#[inline(always)]
fn long_enough(text: &str, min_chars: usize) -> bool {
    if min_chars == 0 {
        return !text.is_empty();
    }
    // A char is at most 4 bytes and at least 1.
    if text.len() < min_chars {
        return false;
    }
    if text.len() >= min_chars * 4 {
        return true;
    }
    text.chars().nth(min_chars - 1).is_some()
}
