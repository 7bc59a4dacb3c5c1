//! Word separators
//!
//! The set of characters that end a "word" for double-click selection and
//! boundary scanning. Passed explicitly to each scan so a gesture can use its
//! own set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Characters that delimit words when no custom set is configured
pub const DEFAULT_SEPARATORS: &[char] = &[
    ' ', '\u{00A0}', // no-break space
    '\t', '\'', '"', '$', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// An immutable, deduplicated set of separator characters.
///
/// Serializes as a plain string so config files can write
/// `"word_separators": " \t()[]"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Separators {
    chars: Vec<char>,
}

impl Separators {
    /// Create a separator set, dropping duplicates but keeping first-seen order
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Vec::new();
        for c in chars {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self { chars: set }
    }

    /// Check if a character ends a word
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct separator characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the set has no separators at all
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the separators in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.iter().copied())
    }
}

impl FromIterator<char> for Separators {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for Separators {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl From<String> for Separators {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Separators> for String {
    fn from(separators: Separators) -> Self {
        separators.chars.into_iter().collect()
    }
}

impl fmt::Display for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.escape_debug())?;
        }
        Ok(())
    }
}
