//! Anagram dictionary.
//!
//! The dictionary maps every [`AnagramKey`] to the set of original words that
//! produce it. Both levels are ordered, so iteration and lookup results are
//! deterministic.
//!
//! # Invariants
//!
//! - Every key present in the dictionary maps to at least one word. A group is
//!   only created together with the word that populates it, and there is no
//!   removal.
//! - Words are stored verbatim. `"Kayak"` and `"kayak"` are two entries in
//!   the same group.
//! - Lookups never mutate the dictionary.
//!
//! # Examples
//!
//! ```
//! use anagram::dictionary::AnagramDictionary;
//!
//! let mut dictionary = AnagramDictionary::new();
//! assert!(dictionary.insert("god"));
//! assert!(dictionary.insert("dog"));
//! assert!(!dictionary.insert("dog"));
//! assert!(!dictionary.insert("###"));
//!
//! let group = dictionary.lookup("GOD").unwrap();
//! assert_eq!(group.words(), &["dog", "god"]);
//!
//! assert!(dictionary.lookup("unknown").is_none());
//! ```

pub mod group;
pub mod loader;
pub mod observer;
pub mod shared;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::{AnagramKey, KeyCanonicalizer};
use crate::config::DictionaryConfig;

pub use group::AnagramGroup;
pub use loader::{BUILTIN_SEED_WORDS, LoadSummary};
pub use observer::{DictionaryObserver, LoggingObserver, NoopObserver};
pub use shared::SharedAnagramDictionary;

/// What happened to a word offered for insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// The word was added to its group.
    Inserted,

    /// The exact word was already present; nothing changed.
    Duplicate,

    /// The word has no usable characters and cannot have a key.
    NotUsable,
}

impl InsertOutcome {
    /// Whether the dictionary grew.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// An ordered dictionary of anagram groups.
#[derive(Clone)]
pub struct AnagramDictionary {
    canonicalizer: KeyCanonicalizer,
    groups: BTreeMap<AnagramKey, BTreeSet<String>>,
    word_count: usize,
    observer: Arc<dyn DictionaryObserver>,
}

impl AnagramDictionary {
    /// Create an empty dictionary using the default ASCII classification.
    pub fn new() -> Self {
        Self::with_canonicalizer(KeyCanonicalizer::default())
    }

    /// Create an empty dictionary that computes keys with `canonicalizer`.
    pub fn with_canonicalizer(canonicalizer: KeyCanonicalizer) -> Self {
        AnagramDictionary {
            canonicalizer,
            groups: BTreeMap::new(),
            word_count: 0,
            observer: Arc::new(NoopObserver::new()),
        }
    }

    /// Create an empty dictionary from a configuration.
    ///
    /// Only the classification and tracing settings apply here; seeding is
    /// left to the caller (see [`AnagramDictionary::load_configured`]).
    pub fn with_config(config: &DictionaryConfig) -> Self {
        let dictionary = Self::with_canonicalizer(KeyCanonicalizer::new(config.classification));
        if config.trace {
            dictionary.with_observer(Arc::new(LoggingObserver::new()))
        } else {
            dictionary
        }
    }

    /// Replace the observer notified on every insert and lookup.
    pub fn with_observer(mut self, observer: Arc<dyn DictionaryObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The canonicalizer used to compute keys.
    pub fn canonicalizer(&self) -> KeyCanonicalizer {
        self.canonicalizer
    }

    /// Insert `text` in its original form.
    ///
    /// Returns `true` if the dictionary grew, `false` if the text was already
    /// present verbatim or has no usable characters.
    pub fn insert(&mut self, text: &str) -> bool {
        self.insert_outcome(text).is_inserted()
    }

    /// Insert `text` and report exactly what happened.
    pub fn insert_outcome(&mut self, text: &str) -> InsertOutcome {
        let key = self.canonicalizer.compute_key(text);
        self.insert_keyed(text, key)
    }

    /// Insert many words, computing their keys in parallel first.
    ///
    /// Words are inserted in the order given, so the outcome is the same as
    /// inserting them one by one. Returns the number of words added.
    pub fn insert_batch<S>(&mut self, words: &[S]) -> usize
    where
        S: AsRef<str> + Sync,
    {
        let keys = compute_keys(self.canonicalizer, words);

        let mut added = 0;
        for (word, key) in words.iter().zip(keys) {
            if self.insert_keyed(word.as_ref(), key).is_inserted() {
                added += 1;
            }
        }
        added
    }

    pub(crate) fn insert_keyed(&mut self, text: &str, key: Option<AnagramKey>) -> InsertOutcome {
        let outcome = match &key {
            None => InsertOutcome::NotUsable,
            Some(key) => {
                let group = self.groups.entry(key.clone()).or_default();
                if group.contains(text) {
                    InsertOutcome::Duplicate
                } else {
                    group.insert(text.to_string());
                    self.word_count += 1;
                    InsertOutcome::Inserted
                }
            }
        };

        self.observer.on_insert(text, key.as_ref(), outcome);
        outcome
    }

    /// Find every stored word that is an anagram of `text`.
    ///
    /// Returns `None` when `text` has no usable characters or nothing shares
    /// its key. The returned group is a snapshot.
    pub fn lookup(&self, text: &str) -> Option<AnagramGroup> {
        let key = self.canonicalizer.compute_key(text);
        self.lookup_keyed(text, key)
    }

    pub(crate) fn lookup_keyed(&self, text: &str, key: Option<AnagramKey>) -> Option<AnagramGroup> {
        let matches = key.as_ref().and_then(|key| self.group(key));
        self.observer.on_lookup(text, key.as_ref(), matches.as_ref());
        matches
    }

    /// Snapshot of the group stored under `key`, if any.
    pub fn group(&self, key: &AnagramKey) -> Option<AnagramGroup> {
        self.groups
            .get(key)
            .filter(|words| !words.is_empty())
            .map(|words| AnagramGroup::from_set(key.clone(), words))
    }

    /// Whether `text` is stored verbatim.
    pub fn contains(&self, text: &str) -> bool {
        self.canonicalizer
            .compute_key(text)
            .and_then(|key| self.groups.get(&key))
            .is_some_and(|words| words.contains(text))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of stored words across all groups.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Iterate over every key and its words, in key order.
    pub fn groups(&self) -> impl Iterator<Item = (&AnagramKey, &BTreeSet<String>)> {
        self.groups.iter()
    }
}

impl Default for AnagramDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnagramDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnagramDictionary")
            .field("classification", &self.canonicalizer.classification())
            .field("keys", &self.groups.len())
            .field("words", &self.word_count)
            .field("observer", &self.observer.name())
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for AnagramDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AnagramDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = AnagramDictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

/// Compute keys for `words` in parallel, preserving order.
pub(crate) fn compute_keys<S>(canonicalizer: KeyCanonicalizer, words: &[S]) -> Vec<Option<AnagramKey>>
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|word| canonicalizer.compute_key(word.as_ref()))
        .collect()
}
