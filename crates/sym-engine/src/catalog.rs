//! Symbol catalog — keyword → glyph table with a lazily built reverse index.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use sym_core::{Result, Symbol, SymbolCategory, SymbolectError, JOINER};

use SymbolCategory::*;

/// (keyword, glyph, category, confidence, weight). The meaning is the keyword.
pub type CatalogEntry = (&'static str, &'static str, SymbolCategory, f64, f64);

/// Built-in catalog, in definition order.
pub const BUILTIN_CATALOG: &[CatalogEntry] = &[
    // Authentication & security
    ("authentication", "🔐", Security, 0.9, 1.0),
    ("login", "🚪", Security, 0.8, 0.9),
    ("password", "🔑", Security, 0.8, 0.9),
    ("security", "🛡️", Security, 0.9, 1.0),
    ("encryption", "🔒", Security, 0.8, 0.9),
    ("token", "🎫", Security, 0.7, 0.8),
    ("oauth", "🔗🔐", Security, 0.8, 0.9),
    ("jwt", "🎫🔐", Security, 0.8, 0.9),
    // User interface
    ("user", "👤", Ui, 0.7, 0.8),
    ("form", "📝", Ui, 0.8, 0.9),
    ("button", "🔘", Ui, 0.6, 0.7),
    ("modal", "🪟", Ui, 0.7, 0.8),
    ("dropdown", "🔽", Ui, 0.6, 0.7),
    ("navigation", "🧭", Ui, 0.7, 0.8),
    ("menu", "☰", Ui, 0.6, 0.7),
    ("dashboard", "📊", Ui, 0.8, 0.9),
    ("sidebar", "📋", Ui, 0.6, 0.7),
    ("header", "🏷️", Ui, 0.6, 0.7),
    ("footer", "📄", Ui, 0.6, 0.7),
    // Data & storage
    ("database", "🗄️", Data, 0.9, 1.0),
    ("api", "🔌", Data, 0.8, 0.9),
    ("storage", "💾", Data, 0.7, 0.8),
    ("cache", "⚡", Data, 0.6, 0.7),
    ("backup", "💿", Data, 0.7, 0.8),
    ("sync", "🔄", Data, 0.7, 0.8),
    ("migration", "🚚", Data, 0.8, 0.9),
    // CRUD and list operations
    ("create", "➕", Operation, 0.8, 0.9),
    ("read", "👁️", Operation, 0.7, 0.8),
    ("update", "🔄", Operation, 0.8, 0.9),
    ("delete", "🗑️", Operation, 0.8, 0.9),
    ("search", "🔍", Operation, 0.7, 0.8),
    ("filter", "🔽", Operation, 0.6, 0.7),
    ("sort", "📊", Operation, 0.6, 0.7),
    ("export", "📤", Operation, 0.7, 0.8),
    ("import", "📥", Operation, 0.7, 0.8),
    // System & architecture
    ("frontend", "🖥️", System, 0.8, 0.9),
    ("backend", "⚙️", System, 0.8, 0.9),
    ("server", "🖥️", System, 0.7, 0.8),
    ("client", "💻", System, 0.7, 0.8),
    ("microservice", "🔗", System, 0.8, 0.9),
    ("container", "📦", System, 0.7, 0.8),
    ("deployment", "🚀", System, 0.8, 0.9),
    // Validation & testing
    ("validation", "✅", Validation, 0.7, 0.8),
    ("test", "🧪", Validation, 0.8, 0.9),
    ("error", "❌", Validation, 0.6, 0.7),
    ("success", "✨", Validation, 0.6, 0.7),
    ("loading", "⏳", Validation, 0.5, 0.6),
    ("warning", "⚠️", Validation, 0.6, 0.7),
    // Communication
    ("email", "📧", Communication, 0.7, 0.8),
    ("notification", "🔔", Communication, 0.7, 0.8),
    ("message", "💬", Communication, 0.6, 0.7),
    ("chat", "💭", Communication, 0.7, 0.8),
    ("webhook", "🪝", Communication, 0.8, 0.9),
    // Business terms
    ("payment", "💳", Operation, 0.8, 0.9),
    ("order", "🛒", Operation, 0.7, 0.8),
    ("invoice", "🧾", Operation, 0.7, 0.8),
    ("report", "📈", Operation, 0.7, 0.8),
    ("analytics", "📊", Operation, 0.8, 0.9),
];

/// Glyph → symbol view. Each glyph keeps the position of its first definition
/// and resolves to the last keyword that defines it.
#[derive(Debug)]
struct ReverseIndex {
    order: Vec<(String, usize)>,
    by_glyph: HashMap<String, usize>,
}

impl ReverseIndex {
    fn build(entries: &[(String, Symbol)]) -> Self {
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut by_glyph: HashMap<String, usize> = HashMap::new();
        for (idx, (_, symbol)) in entries.iter().enumerate() {
            match by_glyph.get(&symbol.glyph) {
                Some(&slot) => order[slot].1 = idx,
                None => {
                    by_glyph.insert(symbol.glyph.clone(), order.len());
                    order.push((symbol.glyph.clone(), idx));
                }
            }
        }
        Self { order, by_glyph }
    }
}

/// Immutable keyword table. Safe to share across threads.
#[derive(Debug)]
pub struct SymbolCatalog {
    entries: Vec<(String, Symbol)>,
    by_keyword: HashMap<String, usize>,
    reverse: OnceLock<ReverseIndex>,
}

impl SymbolCatalog {
    /// Build a catalog. A repeated keyword replaces the earlier definition in place.
    pub fn new(entries: impl IntoIterator<Item = (String, Symbol)>) -> Result<Self> {
        let mut list: Vec<(String, Symbol)> = Vec::new();
        let mut by_keyword = HashMap::new();
        for (keyword, symbol) in entries {
            if symbol.glyph.contains(JOINER) {
                return Err(SymbolectError::ReservedGlyph { glyph: symbol.glyph });
            }
            if !symbol.score().is_finite() {
                return Err(SymbolectError::NonFiniteConfidence { glyph: symbol.glyph });
            }
            let keyword = keyword.to_lowercase();
            match by_keyword.get(&keyword) {
                Some(&idx) => list[idx] = (keyword, symbol),
                None => {
                    by_keyword.insert(keyword.clone(), list.len());
                    list.push((keyword, symbol));
                }
            }
        }
        Ok(Self { entries: list, by_keyword, reverse: OnceLock::new() })
    }

    pub fn from_entries(entries: &[CatalogEntry]) -> Result<Self> {
        Self::new(entries.iter().map(|&(keyword, glyph, category, confidence, weight)| {
            (
                keyword.to_string(),
                Symbol::new(glyph, keyword, category, confidence).with_weight(weight),
            )
        }))
    }

    pub fn builtin() -> Result<Self> {
        Self::from_entries(BUILTIN_CATALOG)
    }

    /// Exact match on an already-lowercased token.
    pub fn lookup(&self, word: &str) -> Option<&Symbol> {
        self.by_keyword.get(word).map(|&idx| &self.entries[idx].1)
    }

    /// Symbol whose glyph equals `glyph` exactly.
    pub fn by_glyph(&self, glyph: &str) -> Option<&Symbol> {
        let index = self.reverse_index();
        index
            .by_glyph
            .get(glyph)
            .map(|&slot| &self.entries[index.order[slot].1].1)
    }

    /// First glyph, in definition order, that contains `fragment`.
    pub fn partial_match(&self, fragment: &str) -> Option<&Symbol> {
        self.reverse_index()
            .order
            .iter()
            .find(|(glyph, _)| glyph.contains(fragment))
            .map(|&(_, idx)| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn category_counts(&self) -> BTreeMap<SymbolCategory, usize> {
        let mut counts = BTreeMap::new();
        for (_, symbol) in &self.entries {
            *counts.entry(symbol.category).or_insert(0) += 1;
        }
        counts
    }

    fn reverse_index(&self) -> &ReverseIndex {
        self.reverse.get_or_init(|| ReverseIndex::build(&self.entries))
    }
}
