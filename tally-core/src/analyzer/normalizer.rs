use super::punctuation::in_punctuation_table;

/// Output class for an ASCII byte.
const DROP: u8 = 0x00;
const SPACE: u8 = 0x20;

/// Maps each ASCII byte to its normalized form: lowercase letters for
/// uppercase, `SPACE` for whitespace, `DROP` for punctuation.
/// Everything else maps to itself.
const ASCII_TABLE: [u8; 128] = build_ascii_table();

const fn build_ascii_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0usize;
    while b < 128 {
        let byte = b as u8;
        table[b] = if byte.is_ascii_uppercase() {
            byte + 32
        } else if byte.is_ascii_punctuation() {
            DROP
        } else if matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
            SPACE
        } else {
            byte
        };
        b += 1;
    }
    table
}

/// Returns `true` for characters the normalizer removes.
///
/// ASCII punctuation, every non-ASCII character in a Unicode punctuation
/// category (`P*`), and the modifier apostrophe (U+02BC, a letter by
/// category) used as a tone/glottal mark in the sentence files.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    c == '\u{02BC}' || in_punctuation_table(c)
}

/// Text normalizer for frequency analysis.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Removes punctuation (see [`is_punctuation`]) without inserting a space,
///   so `"don't"` becomes `"dont"`
/// - Collapses runs of whitespace into single ASCII spaces
/// - Removes leading and trailing whitespace
///
/// The output satisfies the [`Tokenizer`](super::Tokenizer) input contract.
///
/// # Examples
///
/// ```
/// use tally_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  The cat,  SAT!  "), "the cat sat");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity. Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;
        let mut pending_space = false;

        while i < bytes.len() {
            let b = bytes[i];

            if b < 128 {
                i += 1;
                match ASCII_TABLE[b as usize] {
                    DROP => {}
                    SPACE => pending_space = true,
                    lowered => {
                        push_pending_space(out, &mut pending_space);
                        out.push(lowered as char);
                    }
                }
                continue;
            }

            // `i` always sits on a char boundary: it only advances by whole
            // ASCII bytes or by `len_utf8` of a decoded char.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if is_punctuation(ch) {
                continue;
            }

            push_pending_space(out, &mut pending_space);
            for lowered in ch.to_lowercase() {
                out.push(lowered);
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[inline(always)]
fn push_pending_space(out: &mut String, pending: &mut bool) {
    if *pending && !out.is_empty() {
        out.push(' ');
    }
    *pending = false;
}
