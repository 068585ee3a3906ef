//! Command line argument parsing for the anagram CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::Classification;
use crate::config::DictionaryConfig;
use crate::error::Result;

/// anagram - group words into anagram classes and look them up
#[derive(Parser, Debug, Clone)]
#[command(name = "anagram")]
#[command(about = "Group words into anagram classes and look them up")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AnagramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ANAGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use Unicode alphanumerics and case folding instead of ASCII
    #[arg(long)]
    pub unicode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AnagramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the dictionary configuration from the config file and flags.
    pub fn dictionary_config(&self) -> Result<DictionaryConfig> {
        let mut config = match &self.config {
            Some(path) => DictionaryConfig::from_json_file(path)?,
            None => DictionaryConfig::default(),
        };

        if self.unicode {
            config.classification = Classification::Unicode;
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Seed a dictionary and look up anagrams of each word
    Lookup(LookupArgs),

    /// Print the anagram key of each text
    Key(KeyArgs),

    /// Run the built-in demonstration scenario
    Demo,
}

/// Arguments for looking up anagrams
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word list files to load (whitespace-separated words)
    #[arg(short = 'd', long = "dictionary", value_name = "WORD_LIST")]
    pub word_lists: Vec<PathBuf>,

    /// Don't seed the dictionary with the built-in words
    #[arg(long)]
    pub no_builtin: bool,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

impl LookupArgs {
    /// Apply these arguments on top of a dictionary configuration.
    pub fn apply_to(&self, config: &mut DictionaryConfig) {
        if self.no_builtin {
            config.seed_builtin = false;
        }
        config.word_lists.extend(self.word_lists.iter().cloned());
    }
}

/// Arguments for printing anagram keys
#[derive(Parser, Debug, Clone)]
pub struct KeyArgs {
    /// Texts to compute keys for
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
