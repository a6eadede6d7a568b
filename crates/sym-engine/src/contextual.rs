//! Contextual rule table — keyword co-occurrence combinations and
//! caller-supplied context hints.

use sym_core::{Result, SymbolectError, JOINER};

/// Fires when every keyword is a substring of the lowercased text.
#[derive(Debug, Clone)]
pub struct CoOccurrence {
    pub keywords: Vec<String>,
    pub glyph: String,
    pub meaning: String,
    pub confidence: f64,
}

/// Fires when `context[key]` contains `needle`, ignoring case. The needle is
/// stored lowercased.
#[derive(Debug, Clone)]
pub struct ContextHint {
    pub key: String,
    pub needle: String,
    pub glyph: String,
    pub meaning: String,
    pub confidence: f64,
}

pub const PROJECT_TYPE_KEY: &str = "project_type";

const BUILTIN_COMBINATIONS: &[(&[&str], &str, &str, f64)] = &[
    (&["user", "management"], "👥→⚙️", "user_management_system", 0.9),
    (&["real", "time"], "⚡→🔄", "real_time_updates", 0.85),
    (&["dark", "mode"], "🌙→🎨", "dark_mode_theme", 0.8),
    (&["file", "upload"], "📤→📁", "file_upload_system", 0.8),
    (&["data", "visualization"], "📊→📈", "data_visualization", 0.8),
    (&["shopping", "cart"], "🛒→💳", "shopping_cart_system", 0.85),
    (&["two", "factor", "auth"], "🔐→📱", "two_factor_authentication", 0.9),
    (&["machine", "learning"], "🤖→🧠", "machine_learning_system", 0.9),
];

const BUILTIN_HINTS: &[(&str, &str, &str, &str, f64)] = &[
    (PROJECT_TYPE_KEY, "ecommerce", "🛒→💳→📦", "ecommerce_workflow", 0.8),
    (PROJECT_TYPE_KEY, "dashboard", "📊→📈→🎯", "dashboard_analytics", 0.8),
];

#[derive(Debug, Clone)]
pub struct ContextualRuleTable {
    pub combinations: Vec<CoOccurrence>,
    pub hints: Vec<ContextHint>,
}

impl ContextualRuleTable {
    pub fn new(combinations: Vec<CoOccurrence>, mut hints: Vec<ContextHint>) -> Result<Self> {
        let glyphs = combinations
            .iter()
            .map(|c| (&c.glyph, c.confidence))
            .chain(hints.iter().map(|h| (&h.glyph, h.confidence)));
        for (glyph, confidence) in glyphs {
            if glyph.contains(JOINER) {
                return Err(SymbolectError::ReservedGlyph { glyph: glyph.clone() });
            }
            if !confidence.is_finite() {
                return Err(SymbolectError::NonFiniteConfidence { glyph: glyph.clone() });
            }
        }
        for hint in &mut hints {
            hint.needle = hint.needle.to_lowercase();
        }
        Ok(Self { combinations, hints })
    }

    pub fn builtin() -> Result<Self> {
        let combinations = BUILTIN_COMBINATIONS
            .iter()
            .map(|&(keywords, glyph, meaning, confidence)| CoOccurrence {
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                glyph: glyph.into(),
                meaning: meaning.into(),
                confidence,
            })
            .collect();
        let hints = BUILTIN_HINTS
            .iter()
            .map(|&(key, needle, glyph, meaning, confidence)| ContextHint {
                key: key.into(),
                needle: needle.into(),
                glyph: glyph.into(),
                meaning: meaning.into(),
                confidence,
            })
            .collect();
        Self::new(combinations, hints)
    }

    /// Combination rules plus hint rules.
    pub fn len(&self) -> usize {
        self.combinations.len() + self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
