//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases, strips punctuation, collapses whitespace
//! - **Tokenizer**: Splits normalized text into tokens of at least 2 characters
//! - **Bigram**: Pairs adjacent tokens within a single text
//!
//! [`Analyzer`] chains the first two and is what the statistics stages use.

pub mod bigram;
pub mod normalizer;
mod punctuation;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::{Tokenizer, Tokens};

use tally_types::ExplorerConfig;

/// Normalizer + tokenizer.
///
/// Pure and deterministic: the same input always yields the same tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
}

impl Analyzer {
    /// Creates an analyzer that keeps tokens of at least `min_token_chars` characters.
    pub const fn new(min_token_chars: usize) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(min_token_chars),
        }
    }

    /// Creates an analyzer from the explorer configuration.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.min_token_chars)
    }

    /// Normalizes `text` and returns its token stream.
    pub fn analyze(&self, text: &str) -> TokenStream {
        TokenStream {
            normalized: self.normalizer.normalize(text),
            tokenizer: self.tokenizer,
        }
    }

    /// Normalizes `text` into `buf` and returns the tokens borrowed from it.
    ///
    /// Lets hot loops reuse one buffer across many records.
    #[inline]
    pub fn tokens_in<'b>(&self, text: &str, buf: &'b mut String) -> Tokens<'b> {
        self.normalizer.normalize_into(text, buf);
        self.tokenizer.tokens(buf)
    }
}

/// Owned, normalized text that can be tokenized any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    normalized: String,
    tokenizer: Tokenizer,
}

impl TokenStream {
    /// Returns a fresh iterator over the tokens.
    #[inline]
    pub fn iter(&self) -> Tokens<'_> {
        self.tokenizer.tokens(&self.normalized)
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the text produced no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_tokens() {
        let stream = Analyzer::default().analyze("The cat sat. The dog sat!");
        let tokens: Vec<&str> = stream.iter().collect();
        assert_eq!(tokens, ["the", "cat", "sat", "the", "dog", "sat"]);
    }

    #[test]
    fn analyze_is_deterministic() {
        let a = Analyzer::default();
        let text = "Ọ̀ma ẹ́ fu, Ọ̀ma!  ab-cd";
        assert_eq!(a.analyze(text), a.analyze(text));

        let s = a.analyze(text);
        assert_eq!(s.iter().collect::<Vec<_>>(), s.iter().collect::<Vec<_>>());
    }

    /// Punctuation from many scripts and blocks, listed by code point rather
    /// than derived from the lookup table.
    const PUNCTUATION_SAMPLE: &str = "\u{A1}\u{AB}\u{BB}\u{BF}\u{58A}\u{5BE}\u{702}\u{70B}\u{70D}\
        \u{7F7}\u{836}\u{837}\u{83A}\u{970}\u{AF0}\u{F0B}\u{F0F}\u{F14}\u{1361}\u{166E}\
        \u{17D6}\u{1807}\u{1A1F}\u{2014}\u{201C}\u{201D}\u{2026}\u{2035}\u{2037}\u{204A}\
        \u{27EA}\u{2CFA}\u{2E25}\u{2E44}\u{2E46}\u{3001}\u{3002}\u{300B}\u{3017}\u{301C}\
        \u{30FB}\u{FE30}\u{FE31}\u{FE4D}\u{FE5E}\u{FE6A}\u{FF09}\u{FF3C}\u{FF60}\u{FF63}\
        \u{10F57}\u{10F86}\u{11174}";

    #[test]
    fn punctuation_inside_a_word_is_removed() {
        let a = Analyzer::default();
        for p in PUNCTUATION_SAMPLE.chars() {
            let input = format!("ab{p}cd");
            let stream = a.analyze(&input);
            assert_eq!(stream.iter().collect::<Vec<_>>(), ["abcd"], "U+{:04X}", p as u32);
        }
    }

    #[test]
    fn tokens_satisfy_invariants() {
        let a = Analyzer::default();
        let mixed = format!("word{PUNCTUATION_SAMPLE}word");
        let inputs = [
            "I AM here, a B c!",
            "  «Quoted»   text… with—dashes ",
            "x",
            "",
            "ÀBỌ̀ ÉÈ",
            "〜・־︱፡֊ ab〜cd ab・cd ab־cd ab︱cd ab፡cd ab֊cd",
            mixed.as_str(),
        ];
        for input in inputs {
            for token in &a.analyze(input) {
                assert!(token.chars().count() >= 2, "{token:?}");
                assert!(
                    !token.chars().any(|c| c.is_ascii_punctuation() || PUNCTUATION_SAMPLE.contains(c)),
                    "{token:?}"
                );
                assert!(!token.chars().any(char::is_uppercase), "{token:?}");
                assert!(!token.contains(' '));
            }
        }
    }

    #[test]
    fn zero_tokens_is_empty_stream() {
        let s = Analyzer::default().analyze("a . b !");
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn tokens_in_reuses_buffer() {
        let a = Analyzer::default();
        let mut buf = String::new();
        assert_eq!(a.tokens_in("One two", &mut buf).count(), 2);
        assert_eq!(a.tokens_in("Three", &mut buf).collect::<Vec<_>>(), ["three"]);
    }

    #[test]
    fn config_minimum_respected() {
        let cfg = ExplorerConfig {
            min_token_chars: 4,
            ..Default::default()
        };
        let a = Analyzer::from_config(&cfg);
        assert_eq!(a.analyze("the quick fox").iter().collect::<Vec<_>>(), ["quick"]);
    }
}
