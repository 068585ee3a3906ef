//! # anagram
//!
//! Group words into anagram classes and look them up.
//!
//! ## Features
//!
//! - Deterministic anagram keys: symbols and whitespace stripped, case folded,
//!   characters sorted
//! - ASCII or Unicode character classification
//! - Ordered dictionary with verbatim word storage and lexicographic groups
//! - Pluggable trace hooks around insert and lookup
//! - Thread-safe shared dictionary
//!
//! ## Example
//!
//! ```
//! use anagram::prelude::*;
//!
//! let mut dictionary = AnagramDictionary::new();
//! dictionary.seed_builtin();
//! dictionary.insert("Kayak");
//! dictionary.insert("kayak");
//!
//! assert_eq!(dictionary.lookup("KAYAK").unwrap().words(), &["Kayak", "kayak"]);
//! assert_eq!(dictionary.lookup("cat").unwrap().words(), &["act"]);
//! assert!(dictionary.lookup("###").is_none());
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;

pub mod prelude {
    pub use crate::analysis::{AnagramKey, Classification, KeyCanonicalizer, compute_key};
    pub use crate::config::DictionaryConfig;
    pub use crate::dictionary::{
        AnagramDictionary, AnagramGroup, DictionaryObserver, InsertOutcome, LoadSummary,
        SharedAnagramDictionary,
    };
    pub use crate::error::{AnagramError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
