//! Compressed string builder.

use sym_core::{Symbol, SymbolCategory, JOINER};

/// Non-flow glyphs form one joined segment; each flow glyph is its own
/// segment after it. Segments are joined with [`JOINER`].
pub fn build(symbols: &[Symbol]) -> String {
    let mut individual: Vec<&str> = Vec::new();
    let mut flows: Vec<&str> = Vec::new();
    for symbol in symbols {
        match symbol.category {
            SymbolCategory::Flow => flows.push(&symbol.glyph),
            SymbolCategory::Security
            | SymbolCategory::Ui
            | SymbolCategory::Data
            | SymbolCategory::Operation
            | SymbolCategory::System
            | SymbolCategory::Validation
            | SymbolCategory::Communication
            | SymbolCategory::Architecture => individual.push(&symbol.glyph),
        }
    }

    let mut buf = [0u8; 4];
    let joiner: &str = JOINER.encode_utf8(&mut buf);
    let mut segments: Vec<String> = Vec::with_capacity(flows.len() + 1);
    if !individual.is_empty() {
        segments.push(individual.join(joiner));
    }
    segments.extend(flows.into_iter().map(str::to_string));
    segments.join(joiner)
}
