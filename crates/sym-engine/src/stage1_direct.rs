//! Stage 1: Direct detection — catalog lookup per word token.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use sym_core::{Result, Stage, Symbol, SymbolSource, SymbolectError};

use crate::catalog::SymbolCatalog;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w]").unwrap());

const OCCURRENCE_BOOST: f64 = 0.1;

/// Number of word tokens in `text`.
pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(&text.to_lowercase()).count()
}

/// Emit one symbol per token with a catalog hit. Repeated tokens repeat.
pub fn detect(text: &str, catalog: &SymbolCatalog) -> Result<Vec<Symbol>> {
    let lower = text.to_lowercase();
    let mut symbols = Vec::new();

    for m in WORD_RE.find_iter(&lower) {
        let word = m.as_str();
        let clean = NON_WORD_RE.replace_all(word, "");
        let Some(entry) = catalog.lookup(&clean) else { continue };

        // Counts the clean token inside the matched word, not across the text.
        let occurrences = word.matches(&*clean).count();
        let position = first_char_position(&lower, word).ok_or_else(|| SymbolectError::Stage {
            stage: Stage::Direct,
            reason: format!("matched word `{word}` not found in text"),
        })?;

        let mut symbol = entry.clone();
        symbol.confidence = entry.confidence + OCCURRENCE_BOOST * occurrences as f64;
        symbol.source = SymbolSource::Direct;
        symbol.metadata.clear();
        symbols.push(
            symbol
                .with_meta("matched_word", word)
                .with_meta("position", json!(position)),
        );
    }

    Ok(symbols)
}

/// Char offset of the first occurrence of `needle` anywhere in `haystack`.
fn first_char_position(haystack: &str, needle: &str) -> Option<usize> {
    haystack.find(needle).map(|byte| haystack[..byte].chars().count())
}
