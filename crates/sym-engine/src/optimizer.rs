//! Symbol optimizer — stable dedup by glyph, rank by score, truncate.

use std::collections::HashSet;

use sym_core::{Result, Symbol, SymbolectError};

pub const MAX_SYMBOLS: usize = 15;

/// Keep the first occurrence of each glyph, sort by `confidence * weight`
/// descending (ties keep input order) and keep the top `max_symbols`.
pub fn optimize(symbols: Vec<Symbol>, max_symbols: usize) -> Result<Vec<Symbol>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        if !symbol.score().is_finite() {
            return Err(SymbolectError::NonFiniteConfidence { glyph: symbol.glyph });
        }
        if seen.insert(symbol.glyph.clone()) {
            unique.push(symbol);
        }
    }

    // sort_by is stable
    unique.sort_by(|a, b| b.score().total_cmp(&a.score()));
    unique.truncate(max_symbols);
    Ok(unique)
}
