//! A dictionary that can be shared between threads.
//!
//! [`SharedAnagramDictionary`] puts an [`AnagramDictionary`] behind a
//! `parking_lot::RwLock`. Keys are computed before the lock is taken, so the
//! critical sections only cover map access. Inserts take the write lock and
//! lookups the read lock, which makes "create the group if absent, then add
//! the word" a single atomic step.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::KeyCanonicalizer;
use crate::dictionary::{AnagramDictionary, AnagramGroup, InsertOutcome, compute_keys};

/// A cloneable handle to one dictionary shared by many threads.
#[derive(Clone, Debug, Default)]
pub struct SharedAnagramDictionary {
    // Copied from the wrapped dictionary, whose canonicalizer never changes.
    canonicalizer: KeyCanonicalizer,
    inner: Arc<RwLock<AnagramDictionary>>,
}

impl SharedAnagramDictionary {
    /// Create a shared, empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text`; see [`AnagramDictionary::insert`].
    pub fn insert(&self, text: &str) -> bool {
        self.insert_outcome(text).is_inserted()
    }

    /// Insert `text` and report exactly what happened.
    pub fn insert_outcome(&self, text: &str) -> InsertOutcome {
        let key = self.canonicalizer.compute_key(text);
        self.inner.write().insert_keyed(text, key)
    }

    /// Insert many words under a single write lock.
    ///
    /// Keys are computed in parallel before the lock is taken.
    pub fn insert_batch<S>(&self, words: &[S]) -> usize
    where
        S: AsRef<str> + Sync,
    {
        let keys = compute_keys(self.canonicalizer, words);

        let mut dictionary = self.inner.write();
        let mut added = 0;
        for (word, key) in words.iter().zip(keys) {
            if dictionary.insert_keyed(word.as_ref(), key).is_inserted() {
                added += 1;
            }
        }
        added
    }

    /// Look up anagrams of `text`; see [`AnagramDictionary::lookup`].
    pub fn lookup(&self, text: &str) -> Option<AnagramGroup> {
        let key = self.canonicalizer.compute_key(text);
        self.inner.read().lookup_keyed(text, key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Total number of stored words.
    pub fn word_count(&self) -> usize {
        self.inner.read().word_count()
    }

    /// Run `f` with read access to the underlying dictionary.
    pub fn read<R>(&self, f: impl FnOnce(&AnagramDictionary) -> R) -> R {
        f(&self.inner.read())
    }

    /// Copy the current contents into a standalone dictionary.
    pub fn snapshot(&self) -> AnagramDictionary {
        self.inner.read().clone()
    }
}

impl From<AnagramDictionary> for SharedAnagramDictionary {
    fn from(dictionary: AnagramDictionary) -> Self {
        SharedAnagramDictionary {
            canonicalizer: dictionary.canonicalizer(),
            inner: Arc::new(RwLock::new(dictionary)),
        }
    }
}
