//! Stage 2: Flow detection — at most one composite symbol per matching pattern.

use sym_core::{Result, Symbol, SymbolCategory, SymbolSource};

use crate::flow::FlowPatternTable;

pub fn detect(text: &str, flows: &FlowPatternTable) -> Result<Vec<Symbol>> {
    Ok(flows
        .iter()
        .filter(|flow| flow.matches(text))
        .map(|flow| {
            Symbol::new(&flow.flow, &flow.description, SymbolCategory::Flow, flow.confidence)
                .with_source(SymbolSource::Pattern)
                .with_meta("pattern_type", "flow")
                .with_meta("component_glyphs", flow.components.clone())
                .with_meta("matched_pattern", flow.source.as_str())
        })
        .collect())
}
