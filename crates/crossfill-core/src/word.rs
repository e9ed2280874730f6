//! Candidate words.

use std::fmt;

/// A candidate word from the dictionary.
///
/// Lengths and offsets count characters, not bytes, so words outside ASCII
/// line up with grid cells one character per cell.
///
/// # Examples
///
/// ```
/// use crossfill_core::Word;
///
/// let word = Word::new("CAFÉ");
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.letter(3), Some('É'));
/// assert_eq!(word.letter(4), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: Box<str>,
    letters: Box<[char]>,
}

impl Word {
    /// Creates a word from its text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            letters: text.chars().collect(),
        }
    }

    /// Returns the word as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters in the word.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the word has no characters.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the character at offset `k`.
    #[must_use]
    #[inline]
    pub fn letter(&self, k: usize) -> Option<char> {
        self.letters.get(k).copied()
    }

    /// Returns the characters of the word.
    #[must_use]
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Index of a word in a [`Crossword`](crate::Crossword)'s sorted word list.
///
/// Word ids order the same way as the words they refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("w{_0}")]
pub struct WordId(usize);

impl WordId {
    /// Creates an id from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}
