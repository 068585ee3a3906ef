//! Trace hooks around dictionary operations.
//!
//! The dictionary itself never logs. Anything that wants to watch inserts and
//! lookups implements [`DictionaryObserver`] and is attached with
//! [`AnagramDictionary::with_observer`](crate::dictionary::AnagramDictionary::with_observer).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use anagram::dictionary::AnagramDictionary;
//! use anagram::dictionary::observer::LoggingObserver;
//!
//! let mut dictionary = AnagramDictionary::new().with_observer(Arc::new(LoggingObserver::new()));
//! dictionary.insert("dog");
//! ```

use log::{Level, debug, log_enabled, warn};

use crate::analysis::AnagramKey;
use crate::dictionary::InsertOutcome;
use crate::dictionary::group::AnagramGroup;

/// Receives a callback after every insert and lookup.
///
/// All methods have empty default bodies, so an observer only overrides the
/// events it cares about. Observers must be `Send + Sync` so that a
/// dictionary carrying one can live behind a lock shared across threads.
pub trait DictionaryObserver: Send + Sync {
    /// Called after `text` was offered for insertion.
    ///
    /// `key` is `None` when the text had no usable characters.
    fn on_insert(&self, _text: &str, _key: Option<&AnagramKey>, _outcome: InsertOutcome) {}

    /// Called after a lookup for `text` completed.
    ///
    /// `matches` is `None` when nothing matched.
    fn on_lookup(&self, _text: &str, _key: Option<&AnagramKey>, _matches: Option<&AnagramGroup>) {}

    /// Get the name of this observer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An observer that ignores every event.
#[derive(Clone, Debug, Default)]
pub struct NoopObserver;

impl NoopObserver {
    /// Create a new no-op observer.
    pub fn new() -> Self {
        NoopObserver
    }
}

impl DictionaryObserver for NoopObserver {
    fn name(&self) -> &'static str {
        "noop"
    }
}

/// An observer that reports events through the `log` facade.
///
/// Unusable text is reported at `warn`; everything else at `debug`.
#[derive(Clone, Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    pub fn new() -> Self {
        LoggingObserver
    }
}

impl DictionaryObserver for LoggingObserver {
    fn on_insert(&self, text: &str, key: Option<&AnagramKey>, outcome: InsertOutcome) {
        match (key, outcome) {
            (None, _) | (_, InsertOutcome::NotUsable) => warn!(
                "Failed to compute a valid anagram key for '{}'; not inserted.",
                text.escape_debug()
            ),
            (Some(key), InsertOutcome::Inserted) => {
                debug!("Inserted '{}' under key '{key}'.", text.escape_debug())
            }
            (Some(key), InsertOutcome::Duplicate) => debug!(
                "'{}' already exists under key '{key}'.",
                text.escape_debug()
            ),
        }
    }

    fn on_lookup(&self, text: &str, key: Option<&AnagramKey>, matches: Option<&AnagramGroup>) {
        let Some(key) = key else {
            warn!(
                "Failed to compute a valid anagram key for '{}'; nothing can match.",
                text.escape_debug()
            );
            return;
        };

        if log_enabled!(Level::Debug) {
            match matches {
                Some(group) => debug!(
                    "Lookup of '{}' (key '{key}') matched {} word(s).",
                    text.escape_debug(),
                    group.len()
                ),
                None => debug!("Lookup of '{}' (key '{key}') matched nothing.", text.escape_debug()),
            }
        }
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}
