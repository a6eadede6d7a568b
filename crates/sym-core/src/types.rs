use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved glyph separating independent segments of a compressed string.
pub const JOINER: char = '\u{2A39}';

/// Arrow used inside composite flow glyphs.
pub const FLOW_ARROW: char = '→';

/// Caller-supplied hints. Keys are kept sorted so serialization is canonical.
pub type Context = BTreeMap<String, String>;

/// Open-ended metadata attached to symbols and results.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Concept family a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Security,
    Ui,
    Data,
    Operation,
    System,
    Validation,
    Communication,
    Flow,
    Architecture,
}

impl SymbolCategory {
    pub const ALL: [SymbolCategory; 9] = [
        Self::Security,
        Self::Ui,
        Self::Data,
        Self::Operation,
        Self::System,
        Self::Validation,
        Self::Communication,
        Self::Flow,
        Self::Architecture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Ui => "ui",
            Self::Data => "data",
            Self::Operation => "operation",
            Self::System => "system",
            Self::Validation => "validation",
            Self::Communication => "communication",
            Self::Flow => "flow",
            Self::Architecture => "architecture",
        }
    }
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which detector produced a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSource {
    Direct,
    Pattern,
    Contextual,
    Context,
}

impl SymbolSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Pattern => "pattern",
            Self::Contextual => "contextual",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for SymbolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Direct,
    Flow,
    Contextual,
    Optimize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Flow => "flow",
            Self::Contextual => "contextual",
            Self::Optimize => "optimize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub glyph: String,
    pub meaning: String,
    pub category: SymbolCategory,
    /// May exceed 1.0 before the result-level clamp.
    pub confidence: f64,
    pub weight: f64,
    pub source: SymbolSource,
    pub metadata: Metadata,
}

impl Symbol {
    pub fn new(
        glyph: impl Into<String>,
        meaning: impl Into<String>,
        category: SymbolCategory,
        confidence: f64,
    ) -> Self {
        Self {
            glyph: glyph.into(),
            meaning: meaning.into(),
            category,
            confidence,
            weight: 1.0,
            source: SymbolSource::Direct,
            metadata: Metadata::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_source(mut self, source: SymbolSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Ranking score: `confidence * weight`.
    pub fn score(&self) -> f64 {
        self.confidence * self.weight
    }

    pub fn is_flow(&self) -> bool {
        self.category == SymbolCategory::Flow
    }
}

/// Output of `compress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub original_text: String,
    pub compressed: String,
    /// Ranked, highest score first.
    pub symbols: Vec<Symbol>,
    /// Percentage in `[0, 100]`.
    pub compression_ratio: f64,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub metadata: Metadata,
}

impl CompressionResult {
    /// Zero-value result carrying `metadata.error`.
    pub fn degraded(original_text: impl Into<String>, error: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("error".into(), serde_json::Value::String(error.into()));
        Self {
            original_text: original_text.into(),
            compressed: String::new(),
            symbols: Vec::new(),
            compression_ratio: 0.0,
            confidence: 0.0,
            metadata,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.metadata.get("error").and_then(|v| v.as_str())
    }

    pub fn is_degraded(&self) -> bool {
        self.error().is_some()
    }
}

/// Snapshot returned by `statistics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_symbols: usize,
    pub category_counts: BTreeMap<SymbolCategory, usize>,
    pub flow_pattern_count: usize,
    pub contextual_rule_count: usize,
    pub cache_size: usize,
}
