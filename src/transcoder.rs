//! Direction detection and dispatch

use crate::alphabet::Alphabet;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use anyhow::{Context, Result};
use log::{debug, trace};
use std::path::Path;

/// Direction a conversion runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Latin to glyphs
    Encode,
    /// Glyphs to Latin
    Decode,
}

/// Requested conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Always encode
    Encode,
    /// Always decode
    Decode,
    /// Decode if the text holds any glyph sequence, encode otherwise
    #[default]
    Auto,
}

/// Converts text in either direction over one alphabet
pub struct Transcoder<'a> {
    alphabet: &'a Alphabet,
}

impl Transcoder<'static> {
    /// Create a new transcoder over the standard alphabet
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::standard())
    }
}

impl<'a> Transcoder<'a> {
    /// Create a transcoder over a custom alphabet
    pub fn with_alphabet(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encode Latin text to glyphs
    pub fn encode(&self, text: &str) -> String {
        Encoder::with_alphabet(self.alphabet).encode(text)
    }

    /// Decode glyphs to Latin text
    pub fn decode(&self, text: &str) -> String {
        Decoder::with_alphabet(self.alphabet).decode(text)
    }

    /// Check whether any glyph sequence of the alphabet occurs in `text`.
    ///
    /// This only detects presence; it does not check that the whole text is
    /// glyph text.
    pub fn contains_glyph(&self, text: &str) -> bool {
        self.alphabet.glyphs().any(|(_, glyph)| text.contains(glyph))
    }

    /// Pick the direction for `text`: glyph presence wins
    pub fn detect_direction(&self, text: &str) -> Direction {
        let direction = if self.contains_glyph(text) {
            Direction::Decode
        } else {
            Direction::Encode
        };
        trace!("Detected direction {:?} for {} bytes", direction, text.len());
        direction
    }

    /// Convert in the detected direction. Empty text stays empty.
    pub fn auto_convert(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.convert_in(text, self.detect_direction(text))
    }

    /// Convert in an explicit direction
    pub fn convert_in(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::Encode => self.encode(text),
            Direction::Decode => self.decode(text),
        }
    }

    /// Convert according to `mode`, returning the direction actually applied
    pub fn convert(&self, text: &str, mode: Mode) -> (String, Direction) {
        let direction = self.resolve(text, mode);
        if text.is_empty() {
            return (String::new(), direction);
        }
        (self.convert_in(text, direction), direction)
    }

    /// Resolve a mode to a concrete direction for `text`
    pub fn resolve(&self, text: &str, mode: Mode) -> Direction {
        match mode {
            Mode::Encode => Direction::Encode,
            Mode::Decode => Direction::Decode,
            Mode::Auto => self.detect_direction(text),
        }
    }

    /// Convert a UTF-8 text file into `output`
    pub fn convert_file(&self, input: &Path, output: &Path, mode: Mode) -> Result<Direction> {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read: {}", input.display()))?;

        let (converted, direction) = self.convert(&text, mode);

        std::fs::write(output, converted)
            .with_context(|| format!("Failed to write: {}", output.display()))?;

        debug!("{:?}: {} -> {}", direction, input.display(), output.display());
        Ok(direction)
    }
}

impl Default for Transcoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}
