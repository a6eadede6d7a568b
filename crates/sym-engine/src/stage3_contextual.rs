//! Stage 3: Contextual enhancement — keyword combinations and context hints.

use sym_core::{Context, Result, Symbol, SymbolCategory, SymbolSource};

use crate::contextual::ContextualRuleTable;

pub fn detect(
    text: &str,
    context: Option<&Context>,
    rules: &ContextualRuleTable,
) -> Result<Vec<Symbol>> {
    let lower = text.to_lowercase();
    let mut symbols = Vec::new();

    for combo in &rules.combinations {
        if combo.keywords.iter().all(|kw| lower.contains(kw.as_str())) {
            symbols.push(
                Symbol::new(&combo.glyph, &combo.meaning, SymbolCategory::System, combo.confidence)
                    .with_source(SymbolSource::Contextual)
                    .with_meta("keywords", combo.keywords.clone())
                    .with_meta("combination_type", "contextual"),
            );
        }
    }

    let Some(context) = context else { return Ok(symbols) };
    for hint in &rules.hints {
        let Some(value) = context.get(&hint.key) else { continue };
        if value.to_lowercase().contains(hint.needle.as_str()) {
            symbols.push(
                Symbol::new(&hint.glyph, &hint.meaning, SymbolCategory::Flow, hint.confidence)
                    .with_source(SymbolSource::Context)
                    .with_meta("context_key", hint.key.as_str()),
            );
        }
    }

    Ok(symbols)
}
