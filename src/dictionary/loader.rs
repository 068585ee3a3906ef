//! Seeding a dictionary from word lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::config::DictionaryConfig;
use crate::dictionary::{AnagramDictionary, InsertOutcome};
use crate::error::Result;

/// Words every dictionary can be seeded with.
pub const BUILTIN_SEED_WORDS: &[&str] = &["bob", "god", "act", "dog"];

/// Counts collected while loading words into a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Words read from the source.
    pub read: usize,
    /// Words added to the dictionary.
    pub inserted: usize,
    /// Words already present verbatim.
    pub duplicates: usize,
    /// Words without usable characters.
    pub rejected: usize,
}

impl LoadSummary {
    /// Count one insertion outcome.
    pub fn record(&mut self, outcome: InsertOutcome) {
        self.read += 1;
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::Duplicate => self.duplicates += 1,
            InsertOutcome::NotUsable => self.rejected += 1,
        }
    }

    /// Add the counts of `other` to this summary.
    pub fn merge(&mut self, other: LoadSummary) {
        self.read += other.read;
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
        self.rejected += other.rejected;
    }
}

impl AnagramDictionary {
    /// Insert every word read from `reader`.
    ///
    /// Words are separated by ASCII whitespace, which is never part of one.
    /// Input is read as bytes: a word that is not valid UTF-8 is counted as
    /// rejected and loading carries on. Only an I/O error stops the load, and
    /// words read before it stay inserted.
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            for token in line
                .split(|b| b.is_ascii_whitespace())
                .filter(|token| !token.is_empty())
            {
                match std::str::from_utf8(token) {
                    Ok(word) => summary.record(self.insert_outcome(word)),
                    Err(e) => {
                        warn!(
                            "Skipping word that is not valid UTF-8 ({e}): {}",
                            String::from_utf8_lossy(token)
                        );
                        summary.record(InsertOutcome::NotUsable);
                    }
                }
            }
        }

        Ok(summary)
    }

    /// Insert every whitespace-separated word in the file at `path`.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let summary = self.load_from_reader(BufReader::new(file))?;

        info!(
            "Loaded {} word(s) from {} ({} new, {} duplicate, {} unusable).",
            summary.read,
            path.display(),
            summary.inserted,
            summary.duplicates,
            summary.rejected
        );
        Ok(summary)
    }

    /// Insert the [`BUILTIN_SEED_WORDS`].
    pub fn seed_builtin(&mut self) -> LoadSummary {
        let mut summary = LoadSummary::default();
        for word in BUILTIN_SEED_WORDS {
            summary.record(self.insert_outcome(word));
        }
        summary
    }

    /// Build a dictionary from `config` and seed it as the config says.
    pub fn load_configured(config: &DictionaryConfig) -> Result<(Self, LoadSummary)> {
        let mut dictionary = AnagramDictionary::with_config(config);
        let mut summary = LoadSummary::default();

        if config.seed_builtin {
            summary.merge(dictionary.seed_builtin());
        }
        for path in &config.word_lists {
            summary.merge(dictionary.load_from_file(path)?);
        }

        Ok((dictionary, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Cursor, Write};
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::error::AnagramError;

    #[test]
    fn test_load_from_reader() {
        let mut dictionary = AnagramDictionary::new();
        let input = Cursor::new("bob\ngod  act\n\tdog\n### god\n\n");

        let summary = dictionary.load_from_reader(input).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                read: 6,
                inserted: 4,
                duplicates: 1,
                rejected: 1,
            }
        );
        assert_eq!(dictionary.lookup("GOD").unwrap().words(), &["dog", "god"]);
    }

    #[test]
    fn test_load_skips_invalid_utf8_words() {
        let mut dictionary = AnagramDictionary::new();
        let input = Cursor::new(&b"bob god\ncaf\xe9 act\ndog\n"[..]);

        let summary = dictionary.load_from_reader(input).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                read: 5,
                inserted: 4,
                duplicates: 0,
                rejected: 1,
            }
        );
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.lookup("cat").unwrap().words(), &["act"]);
        assert_eq!(dictionary.lookup("GOD").unwrap().words(), &["dog", "god"]);
    }

    #[test]
    fn test_load_keeps_multibyte_words_intact() {
        let mut dictionary = AnagramDictionary::new();
        let summary = dictionary
            .load_from_reader(Cursor::new("café\tface\r\n"))
            .unwrap();

        assert_eq!(summary.read, 2);
        assert!(dictionary.contains("café"));
        assert!(dictionary.contains("face"));
    }

    #[test]
    fn test_seed_builtin() {
        let mut dictionary = AnagramDictionary::new();
        let summary = dictionary.seed_builtin();

        assert_eq!(BUILTIN_SEED_WORDS, &["bob", "god", "act", "dog"]);
        assert_eq!(
            summary,
            LoadSummary {
                read: 4,
                inserted: 4,
                duplicates: 0,
                rejected: 0,
            }
        );
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.lookup("bob").unwrap().words(), &["bob"]);

        let again = dictionary.seed_builtin();
        assert_eq!(again.inserted, 0);
        assert_eq!(again.duplicates, 4);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "listen silent").unwrap();
        writeln!(file, "enlist").unwrap();

        let mut dictionary = AnagramDictionary::new();
        let summary = dictionary.load_from_file(&path).unwrap();

        assert_eq!(summary.inserted, 3);
        assert_eq!(
            dictionary.lookup("TINSEL").unwrap().words(),
            &["enlist", "listen", "silent"]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let mut dictionary = AnagramDictionary::new();
        let result = dictionary.load_from_file("/nonexistent/anagram/words.txt");
        assert!(matches!(result, Err(AnagramError::Io(_))));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_load_configured() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        std::fs::write(&path, "cat tac\n").unwrap();

        let config = DictionaryConfig {
            word_lists: vec![path],
            trace: false,
            ..DictionaryConfig::default()
        };
        let (dictionary, summary) = AnagramDictionary::load_configured(&config).unwrap();

        assert_eq!(summary.read, 6);
        assert_eq!(summary.inserted, 6);
        assert_eq!(dictionary.lookup("cat").unwrap().words(), &["act", "cat", "tac"]);

        let config = DictionaryConfig {
            seed_builtin: false,
            word_lists: vec![PathBuf::from("/nonexistent/words.txt")],
            ..DictionaryConfig::default()
        };
        assert!(AnagramDictionary::load_configured(&config).is_err());
    }
}
