//! Text analysis for anagram grouping.
//!
//! This module turns arbitrary text into the canonical key that names its
//! anagram class. Analysis is split into two concerns:
//!
//! - [`classification`] decides which characters participate in a key and
//!   how they are case-folded.
//! - [`key`] filters, folds and sorts the characters into an [`AnagramKey`].
//!
//! ```text
//! "***Cat***" → filter → "Cat" → fold → "cat" → sort → "act"
//! ```

pub mod classification;
pub mod key;

// Re-export commonly used types
pub use classification::Classification;
pub use key::{AnagramKey, KeyCanonicalizer, compute_key};
