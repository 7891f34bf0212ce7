//! Glyph alphabet data structures

use std::collections::hash_map::{Entry, HashMap};

use log::{debug, warn};
use once_cell::sync::Lazy;

/// Number of letters in the Latin alphabet covered by a glyph alphabet
pub const LETTER_COUNT: usize = 26;

/// The Standard Galactic Alphabet, in definition order.
///
/// Definition order matters: when two letters share a glyph sequence the
/// first one listed here owns the reverse mapping.
pub const STANDARD_TABLE: [(char, &str); LETTER_COUNT] = [
    ('A', "\u{1511}"),
    ('B', "\u{0296}"),
    ('C', "\u{14F5}"),
    ('D', "\u{21B8}"),
    ('E', "\u{14B7}"),
    ('F', "\u{2393}"),
    ('G', "\u{2524}"),
    ('H', "\u{2351}"),
    ('I', "\u{00A6}"),
    ('J', "\u{205D}"),
    ('K', "\u{A58C}"),
    ('L', "\u{A58E}"),
    ('M', "\u{14B2}"),
    ('N', "\u{30EA}"),
    ('O', "\u{30EE}"),
    ('P', "\u{0456}!"),
    ('Q', "\u{1451}"),
    ('R', "\u{2237}"),
    ('S', "\u{200D1}"),
    ('T', "\u{14A3}\u{0323}"),
    ('U', "\u{268D}"),
    ('V', "\u{234A}"),
    ('W', "\u{2234}"),
    ('X', "\u{2E31}/"),
    ('Y', "\u{2016}"),
    ('Z', "\u{2A05}"),
];

static STANDARD: Lazy<Alphabet> = Lazy::new(|| {
    // STANDARD_TABLE defines every letter exactly once with a non-empty glyph.
    Alphabet::from_pairs(STANDARD_TABLE).expect("standard glyph table is complete")
});

/// Error type for alphabet construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Key is not an ASCII letter
    NotALetter { key: char },
    /// Glyph sequence for a letter is empty
    EmptyGlyph { letter: char },
    /// Letter defined more than once (case-insensitive)
    DuplicateLetter { letter: char },
    /// Letter has no glyph sequence
    MissingLetter { letter: char },
}

impl std::fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetError::NotALetter { key } => {
                write!(f, "Invalid alphabet key {:?}. Expected an ASCII letter A-Z or a-z", key)
            }
            AlphabetError::EmptyGlyph { letter } => {
                write!(f, "Empty glyph sequence for letter '{}'", letter)
            }
            AlphabetError::DuplicateLetter { letter } => {
                write!(f, "Letter '{}' is defined more than once", letter)
            }
            AlphabetError::MissingLetter { letter } => {
                write!(f, "Letter '{}' has no glyph sequence", letter)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// A complete letter-to-glyph alphabet with its derived reverse mapping.
///
/// Forward lookups are case-insensitive and backed by an array indexed by
/// letter. The reverse mapping yields uppercase letters only.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Glyph sequence per letter, `A` at index 0
    forward: [String; LETTER_COUNT],
    /// Uppercase letters in definition order
    order: Vec<char>,
    /// Glyph sequence to its canonical letter
    reverse: HashMap<String, char>,
    /// Letters whose glyph sequence was already owned by an earlier letter
    shadowed: Vec<char>,
    /// Longest glyph sequence, in codepoints
    max_glyph_len: usize,
}

impl Alphabet {
    /// The Standard Galactic Alphabet, built on first use
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    /// Build an alphabet from `(letter, glyph)` pairs.
    ///
    /// Keys may be either case; `'a'` and `'A'` name the same letter. All 26
    /// letters must be defined exactly once. The reverse mapping is filled in
    /// the order the pairs are given, first definition wins.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut slots: [Option<String>; LETTER_COUNT] = Default::default();
        let mut order = Vec::with_capacity(LETTER_COUNT);

        for (key, glyph) in pairs {
            let index = letter_index(key).ok_or(AlphabetError::NotALetter { key })?;
            let letter = key.to_ascii_uppercase();
            let glyph = glyph.into();

            if glyph.is_empty() {
                return Err(AlphabetError::EmptyGlyph { letter });
            }
            if slots[index].is_some() {
                return Err(AlphabetError::DuplicateLetter { letter });
            }

            slots[index] = Some(glyph);
            order.push(letter);
        }

        if let Some(index) = slots.iter().position(Option::is_none) {
            return Err(AlphabetError::MissingLetter { letter: letter_at(index) });
        }
        let forward = slots.map(Option::unwrap_or_default);

        let mut reverse = HashMap::with_capacity(LETTER_COUNT);
        let mut shadowed = Vec::new();
        for &letter in &order {
            let glyph = &forward[letter as usize - 'A' as usize];
            match reverse.entry(glyph.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(letter);
                }
                Entry::Occupied(owner) => {
                    warn!(
                        "Glyph {:?} for '{}' is already mapped to '{}'; '{}' will not decode",
                        glyph, letter, owner.get(), letter
                    );
                    shadowed.push(letter);
                }
            }
        }

        let max_glyph_len = forward.iter().map(|g| g.chars().count()).max().unwrap_or(1);

        debug!(
            "Built alphabet: {} glyph sequences, longest {} codepoints, {} shadowed",
            reverse.len(),
            max_glyph_len,
            shadowed.len()
        );

        Ok(Self {
            forward,
            order,
            reverse,
            shadowed,
            max_glyph_len,
        })
    }

    /// Glyph sequence for a Latin letter of either case
    pub fn glyph_for(&self, c: char) -> Option<&str> {
        letter_index(c).map(|i| self.forward[i].as_str())
    }

    /// Canonical uppercase letter for an exact glyph sequence
    pub fn letter_for(&self, glyph: &str) -> Option<char> {
        self.reverse.get(glyph).copied()
    }

    /// `(letter, glyph)` pairs in definition order
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.order
            .iter()
            .map(move |&letter| (letter, self.forward[letter as usize - 'A' as usize].as_str()))
    }

    /// Letters that encode but cannot be recovered by decoding
    pub fn shadowed(&self) -> &[char] {
        &self.shadowed
    }

    /// Length of the longest glyph sequence, in codepoints
    pub fn max_glyph_len(&self) -> usize {
        self.max_glyph_len
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as usize - 'A' as usize)
    } else {
        None
    }
}

fn letter_at(index: usize) -> char {
    (b'A' + index as u8) as char
}
