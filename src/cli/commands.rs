//! Command implementations for the anagram CLI.

use log::{debug, info};

use crate::analysis::KeyCanonicalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::dictionary::{AnagramDictionary, LoadSummary};
use crate::error::{AnagramError, Result};

/// Words inserted by the demo on top of the built-in seed.
pub const DEMO_INSERTS: &[&str] = &["Kayak", "kayak", "C\tA\tT\t", "***Cat***", "dog", "###"];

/// Words the demo looks up.
pub const DEMO_QUERIES: &[&str] = &["KAYAK", "cat", "act", "GOD", "unknown", "###"];

/// Execute a CLI command.
pub fn execute_command(args: AnagramArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup_words(lookup_args.clone(), &args),
        Command::Key(key_args) => show_keys(key_args.clone(), &args),
        Command::Demo => run_demo(&args),
    }
}

/// Seed a dictionary and look up every requested word.
fn lookup_words(args: LookupArgs, cli_args: &AnagramArgs) -> Result<()> {
    let mut config = cli_args.dictionary_config()?;
    args.apply_to(&mut config);

    if !config.seed_builtin && config.word_lists.is_empty() {
        return Err(AnagramError::invalid_operation(
            "Nothing to look up against: --no-builtin requires at least one --dictionary.",
        ));
    }

    let (dictionary, loaded) = AnagramDictionary::load_configured(&config)?;
    info!(
        "Dictionary ready: {} key(s), {} word(s).",
        dictionary.len(),
        dictionary.word_count()
    );

    let results = LookupResults {
        loaded,
        dictionary_keys: dictionary.len(),
        lookups: lookup_all(&dictionary, args.words.as_slice()),
    };

    output_lookups(&results, cli_args)
}

/// Print the anagram key of every requested text.
fn show_keys(args: KeyArgs, cli_args: &AnagramArgs) -> Result<()> {
    let config = cli_args.dictionary_config()?;
    let canonicalizer = KeyCanonicalizer::new(config.classification);
    debug!("Computing keys with {} classification.", config.classification.name());

    let reports: Vec<KeyReport> = args
        .texts
        .iter()
        .map(|text| KeyReport {
            text: text.clone(),
            key: canonicalizer.compute_key(text),
        })
        .collect();

    output_keys(&reports, cli_args)
}

/// Seed the built-in words, insert the demo words, and report the demo lookups.
fn run_demo(cli_args: &AnagramArgs) -> Result<()> {
    let config = cli_args.dictionary_config()?;
    let (dictionary, loaded) = demo_dictionary(&config)?;

    let results = LookupResults {
        loaded,
        dictionary_keys: dictionary.len(),
        lookups: lookup_all(&dictionary, DEMO_QUERIES),
    };

    output_lookups(&results, cli_args)
}

/// Build the dictionary the demo runs against.
pub fn demo_dictionary(config: &DictionaryConfig) -> Result<(AnagramDictionary, LoadSummary)> {
    let (mut dictionary, mut loaded) = AnagramDictionary::load_configured(config)?;
    for word in DEMO_INSERTS {
        loaded.record(dictionary.insert_outcome(word));
    }
    Ok((dictionary, loaded))
}

/// Look up every query, keeping the computed key alongside the matches.
pub fn lookup_all<S: AsRef<str>>(dictionary: &AnagramDictionary, queries: &[S]) -> Vec<LookupReport> {
    let canonicalizer = dictionary.canonicalizer();
    queries
        .iter()
        .map(|query| {
            let query = query.as_ref();
            LookupReport::new(query, canonicalizer.compute_key(query), dictionary.lookup(query))
        })
        .collect()
}
