//! Latin to glyph encoder

use crate::alphabet::Alphabet;
use anyhow::{Context, Result};

/// Encodes Latin text into glyph text
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl Encoder<'static> {
    /// Create a new encoder over the standard alphabet
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::standard())
    }
}

impl<'a> Encoder<'a> {
    /// Create an encoder over a custom alphabet
    pub fn with_alphabet(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encode text to a string.
    ///
    /// Letters of either case become their glyph sequence. Every other
    /// codepoint, glyphs included, is copied through unchanged.
    pub fn encode(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() * 3);

        for c in text.chars() {
            match self.alphabet.glyph_for(c) {
                Some(glyph) => output.push_str(glyph),
                None => output.push(c),
            }
        }

        output
    }

    /// Encode text directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, text: &str, mut writer: W) -> Result<()> {
        let encoded = self.encode(text);
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Encode text to a file
    pub fn encode_to_file(&self, text: &str, path: &std::path::Path) -> Result<()> {
        let encoded = self.encode(text);
        std::fs::write(path, encoded)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::tests::table_with;

    #[test]
    fn test_encode_single_letter() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("A"), "ᔑ");
    }

    #[test]
    fn test_encode_word() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("CAB"), "ᓵᔑʖ");
    }

    #[test]
    fn test_encode_case_folding() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("a"), encoder.encode("A"));
        assert_eq!(encoder.encode("Hello"), encoder.encode("HELLO"));
    }

    #[test]
    fn test_encode_passes_through_non_letters() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("hi, 2024!"), "⍑¦, 2024!");
        assert_eq!(encoder.encode("123 -+ \n\t"), "123 -+ \n\t");
        assert_eq!(encoder.encode("日本語 é"), "日本語 é");
    }

    #[test]
    fn test_encode_multi_codepoint_glyphs() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("pxt"), "і!⸱/ᒣ̣");
        assert_eq!(encoder.encode("s"), "𠃑");
    }

    #[test]
    fn test_encode_leaves_glyphs_alone() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode("ᔑʖ"), "ᔑʖ");
    }

    #[test]
    fn test_encode_empty() {
        let encoder = Encoder::new();
        assert_eq!(encoder.encode(""), "");
    }

    #[test]
    fn test_encode_never_shrinks() {
        let encoder = Encoder::new();
        let input = "The quick brown fox jumps over the lazy dog. 0123456789";
        let output = encoder.encode(input);
        assert!(output.chars().count() >= input.chars().count());
    }

    #[test]
    fn test_encode_custom_alphabet() {
        let alphabet = Alphabet::from_pairs(table_with('A', "@@@")).unwrap();
        let encoder = Encoder::with_alphabet(&alphabet);
        assert_eq!(encoder.encode("aB"), "@@@ʖ");
    }

    #[test]
    fn test_encode_to_writer() {
        let encoder = Encoder::new();
        let mut buffer = Vec::new();
        encoder.encode_to_writer("cab", &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "ᓵᔑʖ");
    }

    #[test]
    fn test_encode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let encoder = Encoder::new();
        encoder.encode_to_file("hi", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "⍑¦");
    }

    #[test]
    fn test_encode_to_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let encoder = Encoder::new();
        let err = encoder.encode_to_file("hi", &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
