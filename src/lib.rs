//! # emx-sga
//!
//! Transcoder between Latin text and the Standard Galactic Alphabet (SGA).
//!
//! Each Latin letter maps to one glyph sequence. Most sequences are a single
//! codepoint, a few are two:
//!
//! ```text
//! A -> ᔑ    B -> ʖ    C -> ᓵ    ...
//! P -> і!   T -> ᒣ̣   X -> ⸱/
//! ```
//!
//! ## Encoding
//!
//! Encoding folds case: `a` and `A` both become `ᔑ`. Anything that is not an
//! ASCII letter (digits, punctuation, whitespace, other scripts, glyphs) is
//! copied through unchanged.
//!
//! ## Decoding
//!
//! Decoding yields uppercase letters. At every position the longest glyph
//! sequence wins, so `і!` decodes to `P` rather than an unknown `і` and a
//! literal `!`. Unrecognized codepoints are copied through.
//!
//! ## Direction Detection
//!
//! [`auto_convert`] decodes when the text contains any glyph sequence and
//! encodes otherwise. Mixed text is therefore decoded: glyph runs convert,
//! Latin runs pass through.
//!
//! ```
//! assert_eq!(emx_sga::encode("cab"), "ᓵᔑʖ");
//! assert_eq!(emx_sga::decode("ᓵᔑʖ"), "CAB");
//! assert_eq!(emx_sga::auto_convert("ᔑʖᓵ"), "ABC");
//! ```

pub mod alphabet;
pub mod encoder;
pub mod decoder;
pub mod transcoder;

pub use alphabet::{Alphabet, AlphabetError, LETTER_COUNT, STANDARD_TABLE};
pub use encoder::Encoder;
pub use decoder::Decoder;
pub use transcoder::{Direction, Mode, Transcoder};

/// Encode Latin text with the standard alphabet
pub fn encode(text: &str) -> String {
    Encoder::new().encode(text)
}

/// Decode glyph text with the standard alphabet
pub fn decode(text: &str) -> String {
    Decoder::new().decode(text)
}

/// Decode if `text` contains a standard glyph sequence, encode otherwise
pub fn auto_convert(text: &str) -> String {
    Transcoder::new().auto_convert(text)
}

/// Check whether `text` contains any standard glyph sequence
pub fn contains_glyph(text: &str) -> bool {
    Transcoder::new().contains_glyph(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(encode("A"), "ᔑ");
        assert_eq!(decode("ᔑ"), "A");

        assert_eq!(encode("CAB"), "ᓵᔑʖ");
        assert_eq!(decode("ᓵᔑʖ"), "CAB");

        assert_eq!(auto_convert("hello"), encode("hello"));

        assert_eq!(auto_convert("ᔑʖᓵ"), decode("ᔑʖᓵ"));
        assert_eq!(auto_convert("ᔑʖᓵ"), "ABC");

        assert_eq!(encode("hi, 2024!"), "⍑¦, 2024!");

        assert_eq!(decode(""), "");
        assert_eq!(encode(""), "");
        assert_eq!(auto_convert(""), "");
    }

    #[test]
    fn test_pass_through_is_identity() {
        let text = "0123 ,.;:!? \n\t 日本語 ñ";
        assert!(!contains_glyph(text));
        assert_eq!(encode(text), text);
        assert_eq!(decode(text), text);
    }

    #[test]
    fn test_standard_alphabet_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| decode(&encode("galactic"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "GALACTIC");
        }
    }
}
