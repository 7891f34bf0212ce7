//! Glyph to Latin decoder

use crate::alphabet::Alphabet;
use anyhow::{Context, Result};
use log::trace;

/// Decodes glyph text back into uppercase Latin text
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl Decoder<'static> {
    /// Create a new decoder over the standard alphabet
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::standard())
    }
}

impl<'a> Decoder<'a> {
    /// Create a decoder over a custom alphabet
    pub fn with_alphabet(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Decode text to a string.
    ///
    /// At each codepoint position the longest glyph sequence starting there
    /// wins, so a two-codepoint glyph is never split into a one-codepoint
    /// glyph plus a stray character. Unrecognized codepoints pass through.
    pub fn decode(&self, text: &str) -> String {
        // Byte offset of every codepoint boundary, including the end
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let count = bounds.len() - 1;
        let lookahead = self.alphabet.max_glyph_len();

        let mut output = String::with_capacity(text.len());
        let mut pos = 0;

        while pos < count {
            let longest = lookahead.min(count - pos);
            let matched = (1..=longest).rev().find_map(|len| {
                let candidate = &text[bounds[pos]..bounds[pos + len]];
                self.alphabet.letter_for(candidate).map(|letter| (letter, len))
            });

            match matched {
                Some((letter, len)) => {
                    output.push(letter);
                    pos += len;
                }
                None => {
                    let unmatched = &text[bounds[pos]..bounds[pos + 1]];
                    trace!("Passing through {:?} at codepoint {}", unmatched, pos);
                    output.push_str(unmatched);
                    pos += 1;
                }
            }
        }

        output
    }

    /// Decode text directly to a writer
    pub fn decode_to_writer<W: std::io::Write>(&self, text: &str, mut writer: W) -> Result<()> {
        let decoded = self.decode(text);
        writer.write_all(decoded.as_bytes())?;
        Ok(())
    }

    /// Decode text to a file
    pub fn decode_to_file(&self, text: &str, path: &std::path::Path) -> Result<()> {
        let decoded = self.decode(text);
        std::fs::write(path, decoded)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}
