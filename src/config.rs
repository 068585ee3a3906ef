//! Configuration for anagram dictionaries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::Classification;
use crate::error::{AnagramError, Result};

/// Configuration for an anagram dictionary and how it is seeded.
///
/// Every field has a default, so a configuration file only needs to name
/// what it changes:
///
/// ```json
/// { "classification": "unicode", "word_lists": ["words.txt"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Character repertoire used to compute keys.
    pub classification: Classification,

    /// Whether to seed the dictionary with the built-in word list.
    pub seed_builtin: bool,

    /// Word list files (whitespace-separated words) loaded at startup.
    pub word_lists: Vec<PathBuf>,

    /// Whether insert and lookup outcomes are traced through `log`.
    pub trace: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            classification: Classification::Ascii,
            seed_builtin: true,
            word_lists: Vec::new(),
            trace: true,
        }
    }
}

impl DictionaryConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DictionaryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Relative word list paths are resolved against the directory that
    /// contains the configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&content)?;

        if let Some(base) = path.parent() {
            for list in &mut config.word_lists {
                if list.is_relative() {
                    *list = base.join(&*list);
                }
            }
        }

        Ok(config)
    }

    /// Check the configuration for values that cannot be used.
    pub fn validate(&self) -> Result<()> {
        if let Some(empty) = self.word_lists.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(AnagramError::config(format!(
                "word list path must not be empty (got {empty:?})"
            )));
        }
        Ok(())
    }
}
