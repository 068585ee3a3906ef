//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::AnagramKey;
use crate::cli::args::{AnagramArgs, OutputFormat};
use crate::dictionary::{AnagramGroup, LoadSummary};
use crate::error::Result;

/// Result of looking up one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub query: String,
    pub key: Option<AnagramKey>,
    pub matches: Option<Vec<String>>,
}

impl LookupReport {
    pub fn new(query: &str, key: Option<AnagramKey>, matches: Option<AnagramGroup>) -> Self {
        LookupReport {
            query: query.to_string(),
            key,
            matches: matches.map(AnagramGroup::into_words),
        }
    }
}

/// Result of computing the key of one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub text: String,
    pub key: Option<AnagramKey>,
}

/// Everything a lookup command produced.
#[derive(Debug, Serialize)]
pub struct LookupResults {
    pub loaded: LoadSummary,
    pub dictionary_keys: usize,
    pub lookups: Vec<LookupReport>,
}

/// Render the words of a lookup as `[a, b, c]`.
pub fn render_matches(words: &[String]) -> String {
    format!("[{}]", words.join(", "))
}

/// Render a lookup result the way the human output prints it.
pub fn render_lookup(query: &str, matches: Option<&[String]>) -> String {
    match matches {
        Some(words) => format!(
            "Here is the list of matching anagrams for '{}': {}.",
            query.escape_debug(),
            render_matches(words)
        ),
        None => format!("No matching anagrams were found for '{}'.", query.escape_debug()),
    }
}

/// Render a key result the way the human output prints it.
pub fn render_key(text: &str, key: Option<&AnagramKey>) -> String {
    match key {
        Some(key) => format!("'{}' -> {key}", text.escape_debug()),
        None => format!("'{}' -> not usable (no alphanumeric characters)", text.escape_debug()),
    }
}

/// Output the results of a lookup command.
pub fn output_lookups(results: &LookupResults, args: &AnagramArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(results, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!(
                    "Dictionary: {} key(s) from {} word(s) read ({} new, {} duplicate, {} unusable)",
                    results.dictionary_keys,
                    results.loaded.read,
                    results.loaded.inserted,
                    results.loaded.duplicates,
                    results.loaded.rejected
                );
                println!();
            }
            for report in &results.lookups {
                println!("{}", render_lookup(&report.query, report.matches.as_deref()));
            }
            Ok(())
        }
    }
}

/// Output the results of a key command.
pub fn output_keys(reports: &[KeyReport], args: &AnagramArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&reports, args),
        OutputFormat::Human => {
            for report in reports {
                println!("{}", render_key(&report.text, report.key.as_ref()));
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &AnagramArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_key;
    use crate::dictionary::AnagramDictionary;

    #[test]
    fn test_render_lookup() {
        let words = vec!["dog".to_string(), "god".to_string()];
        assert_eq!(
            render_lookup("GOD", Some(words.as_slice())),
            "Here is the list of matching anagrams for 'GOD': [dog, god]."
        );
        assert_eq!(
            render_lookup("unknown", None),
            "No matching anagrams were found for 'unknown'."
        );
    }

    #[test]
    fn test_render_keeps_words_verbatim_and_escapes_query() {
        let words = vec!["C\tA\tT\t".to_string(), "act".to_string()];
        assert_eq!(render_matches(&words), "[C\tA\tT\t, act]");
        assert_eq!(
            render_lookup("C\tA", None),
            "No matching anagrams were found for 'C\\tA'."
        );
    }

    #[test]
    fn test_render_key() {
        assert_eq!(render_key("God", compute_key("God").as_ref()), "'God' -> dgo");
        assert_eq!(
            render_key("###", None),
            "'###' -> not usable (no alphanumeric characters)"
        );
    }

    #[test]
    fn test_lookup_report_json() {
        let mut dictionary = AnagramDictionary::new();
        dictionary.insert("act");

        let hit = LookupReport::new("cat", compute_key("cat"), dictionary.lookup("cat"));
        let miss = LookupReport::new("###", None, dictionary.lookup("###"));

        assert_eq!(
            to_json(&hit, false).unwrap(),
            r#"{"query":"cat","key":"act","matches":["act"]}"#
        );
        assert_eq!(
            to_json(&miss, false).unwrap(),
            "{\"query\":\"###\",\"key\":null,\"matches\":null}"
        );
    }
}
