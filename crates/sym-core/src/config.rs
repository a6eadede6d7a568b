use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolectConfig {
    /// Symbols kept after ranking.
    pub max_symbols: usize,
    /// Minimum trimmed length (in code points) accepted by `compress`.
    pub min_input_chars: usize,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// `None` keeps every result until the cache is cleared.
    pub capacity: Option<u64>,
}

impl SymbolectConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache.capacity = Some(capacity);
        self
    }
}

impl Default for SymbolectConfig {
    fn default() -> Self {
        Self {
            max_symbols: 15,
            min_input_chars: 3,
            cache: CacheConfig::default(),
        }
    }
}
