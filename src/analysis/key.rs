//! Anagram key computation.
//!
//! A key is the sorted, case-folded sequence of the alphanumeric characters
//! of a text. Two texts are anagrams of each other exactly when their keys
//! are equal. Text with no alphanumeric characters at all has no key.
//!
//! # Examples
//!
//! ```
//! use anagram::analysis::compute_key;
//!
//! let key = compute_key("God").unwrap();
//! assert_eq!(key.as_str(), "dgo");
//! assert_eq!(compute_key("dog"), Some(key));
//!
//! assert_eq!(compute_key("###"), None);
//! ```

use std::fmt;

use serde::Serialize;

use crate::analysis::classification::Classification;

/// Canonical key naming an anagram class.
///
/// Only a [`KeyCanonicalizer`] can produce one, so every key is non-empty,
/// lowercase and sorted by code point.
///
/// Under [`Classification::Unicode`] a lowercase mapping can expand to
/// characters that are not alphanumeric themselves ('İ' folds to
/// `"i\u{307}"`). Such a key still compares correctly, but computing a key
/// from it again drops those characters and yields a different key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnagramKey(String);

impl AnagramKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the key.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the key and return its string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AnagramKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes anagram keys under a fixed [`Classification`].
///
/// The canonicalizer holds no mutable state; it is `Copy` and can be shared
/// freely between threads.
///
/// # Behavior
///
/// 1. Characters the classification does not retain are discarded
///    (punctuation, whitespace, control characters, symbols).
/// 2. If nothing is left, the text is not usable and `None` is returned.
/// 3. Remaining characters are folded to lowercase.
/// 4. Characters are sorted in ascending code point order.
///
/// # Examples
///
/// ```
/// use anagram::analysis::{Classification, KeyCanonicalizer};
///
/// let canonicalizer = KeyCanonicalizer::new(Classification::Ascii);
/// let key = canonicalizer.compute_key("C\tA\tT\t").unwrap();
/// assert_eq!(key.as_str(), "act");
///
/// assert_eq!(canonicalizer.compute_key("Kayak"), canonicalizer.compute_key("kayak"));
/// assert!(canonicalizer.compute_key(" \t*** ").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCanonicalizer {
    classification: Classification,
}

impl KeyCanonicalizer {
    /// Create a canonicalizer for the given classification.
    pub fn new(classification: Classification) -> Self {
        KeyCanonicalizer { classification }
    }

    /// The classification this canonicalizer applies.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Compute the anagram key for `text`, or `None` if the text has no
    /// characters that could take part in an anagram.
    pub fn compute_key(&self, text: &str) -> Option<AnagramKey> {
        let mut chars = Vec::with_capacity(text.len());
        for c in text.chars().filter(|&c| self.classification.retains(c)) {
            self.classification.fold_into(c, &mut chars);
        }

        if chars.is_empty() {
            return None;
        }

        chars.sort_unstable();
        Some(AnagramKey(chars.into_iter().collect()))
    }
}

/// Compute the anagram key for `text` with the default ASCII classification.
pub fn compute_key(text: &str) -> Option<AnagramKey> {
    KeyCanonicalizer::default().compute_key(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> Option<String> {
        compute_key(text).map(AnagramKey::into_string)
    }

    #[test]
    fn test_sorts_and_folds() {
        assert_eq!(key("dog").as_deref(), Some("dgo"));
        assert_eq!(key("GOD").as_deref(), Some("dgo"));
        assert_eq!(key("Kayak").as_deref(), Some("aakky"));
        assert_eq!(compute_key("Kayak"), compute_key("kayak"));
    }

    #[test]
    fn test_strips_symbols_and_whitespace() {
        assert_eq!(key("C\tA\tT\t").as_deref(), Some("act"));
        assert_eq!(key("***Cat***").as_deref(), Some("act"));
        assert_eq!(key("a-b c").as_deref(), Some("abc"));
    }

    #[test]
    fn test_digits_participate() {
        assert_eq!(key("r2d2").as_deref(), Some("22dr"));
        assert_ne!(compute_key("abc1"), compute_key("abc"));
    }

    #[test]
    fn test_not_usable() {
        assert_eq!(compute_key("###"), None);
        assert_eq!(compute_key(""), None);
        assert_eq!(compute_key(" \t\r\n"), None);
        // Non-ASCII letters are outside the default repertoire.
        assert_eq!(compute_key("ééé"), None);
    }

    #[test]
    fn test_multiset_not_set() {
        assert_ne!(compute_key("aab"), compute_key("abb"));
        assert_ne!(compute_key("ab"), compute_key("aab"));
    }

    #[test]
    fn test_idempotent_on_keys() {
        for text in ["Listen", "Silent!", "C\tA\tT\t", "Dormitory 42"] {
            let first = compute_key(text).unwrap();
            let second = compute_key(first.as_str()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_unicode_classification() {
        let canonicalizer = KeyCanonicalizer::new(Classification::Unicode);
        assert_eq!(canonicalizer.compute_key("Éa"), canonicalizer.compute_key("aé"));
        assert_eq!(
            canonicalizer.compute_key("Straße").map(AnagramKey::into_string).as_deref(),
            Some("aerstß")
        );
        assert_eq!(canonicalizer.compute_key("¿?¡!"), None);
        assert_eq!(canonicalizer.classification(), Classification::Unicode);
    }

    #[test]
    fn test_unicode_fold_can_leave_combining_marks() {
        let canonicalizer = KeyCanonicalizer::new(Classification::Unicode);
        let dotted = canonicalizer.compute_key("İ").unwrap();
        assert_eq!(dotted.as_str(), "i\u{307}");
        assert_eq!(dotted.char_len(), 2);

        // The combining dot is not alphanumeric, so it does not survive a
        // second pass.
        let again = canonicalizer.compute_key(dotted.as_str()).unwrap();
        assert_eq!(again.as_str(), "i");
        assert_ne!(again, dotted);
    }

    #[test]
    fn test_key_accessors() {
        let key = compute_key("Éclair").unwrap();
        assert_eq!(key.as_str(), "acilr");
        assert_eq!(key.char_len(), 5);
        assert_eq!(key.to_string(), "acilr");
        assert_eq!(AsRef::<str>::as_ref(&key), "acilr");
    }
}
