//! Decompressor — reverse glyph → meaning lookup.

use sym_core::{FLOW_ARROW, JOINER};

use crate::catalog::SymbolCatalog;

pub const SEGMENT_SEPARATOR: &str = " + ";

/// Describe one segment of a compressed string.
pub fn describe_segment(segment: &str, catalog: &SymbolCatalog) -> String {
    if segment.contains(FLOW_ARROW) {
        return format!("Flow: {segment}");
    }
    if let Some(symbol) = catalog.by_glyph(segment) {
        return symbol.meaning.clone();
    }
    match catalog.partial_match(segment) {
        Some(symbol) => format!("{} (partial)", symbol.meaning),
        None => format!("Unknown: {segment}"),
    }
}

pub fn decompress(compressed: &str, catalog: &SymbolCatalog) -> String {
    if compressed.is_empty() {
        return String::new();
    }
    compressed
        .split(JOINER)
        .map(|segment| describe_segment(segment, catalog))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}
