//! Character classification used when building anagram keys.
//!
//! A classification answers two questions for every character of the input:
//! does it take part in the key at all, and what does it look like once
//! case-folded. Keys built under different classifications are not
//! comparable, so a dictionary sticks to one for its whole lifetime.

use serde::{Deserialize, Serialize};

/// The character repertoire a key canonicalizer works with.
///
/// # Behavior
///
/// - [`Classification::Ascii`] keeps `[A-Za-z0-9]` and folds ASCII letters to
///   lowercase. Every other character, including non-ASCII letters, is
///   discarded like punctuation.
/// - [`Classification::Unicode`] keeps anything [`char::is_alphanumeric`]
///   accepts and folds with [`char::to_lowercase`]. A single character may
///   fold into several (`'İ'` becomes `"i\u{307}"`); all of them go into the
///   key. No normalization (NFC/NFD) is applied, so precomposed and
///   decomposed forms of the same letter produce different keys.
///
/// # Examples
///
/// ```
/// use anagram::analysis::Classification;
///
/// assert!(Classification::Ascii.retains('Z'));
/// assert!(!Classification::Ascii.retains('é'));
/// assert!(Classification::Unicode.retains('é'));
/// assert!(!Classification::Unicode.retains('#'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// 7-bit ASCII alphanumerics only.
    #[default]
    Ascii,

    /// Unicode alphanumerics with full lowercase mapping.
    Unicode,
}

impl Classification {
    /// Whether `c` participates in an anagram key.
    pub fn retains(&self, c: char) -> bool {
        match self {
            Classification::Ascii => c.is_ascii_alphanumeric(),
            Classification::Unicode => c.is_alphanumeric(),
        }
    }

    /// Append the case-folded form of `c` to `out`.
    pub fn fold_into(&self, c: char, out: &mut Vec<char>) {
        match self {
            Classification::Ascii => out.push(c.to_ascii_lowercase()),
            Classification::Unicode => out.extend(c.to_lowercase()),
        }
    }

    /// Name used in configuration files and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Ascii => "ascii",
            Classification::Unicode => "unicode",
        }
    }
}
