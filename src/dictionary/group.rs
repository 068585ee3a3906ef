//! Snapshot of an anagram group returned by lookups.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::analysis::AnagramKey;

/// The words sharing one anagram key, as seen at lookup time.
///
/// A group is an owned copy: later insertions into the dictionary do not
/// change a group that has already been returned. Words are kept in their
/// original form and ordered lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    key: AnagramKey,
    words: Vec<String>,
}

impl AnagramGroup {
    pub(crate) fn from_set(key: AnagramKey, words: &BTreeSet<String>) -> Self {
        AnagramGroup {
            key,
            words: words.iter().cloned().collect(),
        }
    }

    /// The key every word in this group maps to.
    pub fn key(&self) -> &AnagramKey {
        &self.key
    }

    /// The words, in lexicographic order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the group.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the group has no words. Groups returned by a lookup never are.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the group verbatim.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|stored| stored.as_str().cmp(word))
            .is_ok()
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Consume the group and return its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl IntoIterator for AnagramGroup {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Renders as `[first, second, ...]`.
impl fmt::Display for AnagramGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(word)?;
        }
        f.write_str("]")
    }
}
