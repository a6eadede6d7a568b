//! Compression cache — content-addressed memo of full results.
//!
//! Keys are xxh3 hashes of the text and the canonical JSON of its context.
//! The default backend never evicts; a capacity selects a bounded moka cache.

use std::collections::HashMap;
use std::sync::Arc;

use moka::sync::Cache;
use parking_lot::RwLock;
use sym_core::{CompressionResult, Context, Result};
use xxhash_rust::xxh3::xxh3_64;

pub type CacheKey = u64;

enum Backend {
    Unbounded(RwLock<HashMap<CacheKey, Arc<CompressionResult>>>),
    Bounded(Cache<CacheKey, Arc<CompressionResult>>),
}

pub struct CompressionCache {
    backend: Backend,
}

impl CompressionCache {
    pub fn unbounded() -> Self {
        Self { backend: Backend::Unbounded(RwLock::new(HashMap::new())) }
    }

    pub fn bounded(max_entries: u64) -> Self {
        Self { backend: Backend::Bounded(Cache::new(max_entries)) }
    }

    pub fn with_capacity(capacity: Option<u64>) -> Self {
        match capacity {
            Some(n) => Self::bounded(n),
            None => Self::unbounded(),
        }
    }

    /// Stable key over `(text, context)`. An absent or empty context
    /// contributes nothing.
    pub fn key(text: &str, context: Option<&Context>) -> Result<CacheKey> {
        let context_str = match context {
            Some(ctx) if !ctx.is_empty() => serde_json::to_string(ctx)?,
            _ => String::new(),
        };
        let combined = format!("{text}|{context_str}");
        Ok(xxh3_64(combined.as_bytes()))
    }

    pub fn get(&self, key: CacheKey) -> Option<Arc<CompressionResult>> {
        match &self.backend {
            Backend::Unbounded(map) => map.read().get(&key).cloned(),
            Backend::Bounded(cache) => cache.get(&key),
        }
    }

    pub fn insert(&self, key: CacheKey, result: Arc<CompressionResult>) {
        match &self.backend {
            Backend::Unbounded(map) => {
                map.write().insert(key, result);
            }
            Backend::Bounded(cache) => cache.insert(key, result),
        }
    }

    pub fn len(&self) -> usize {
        match &self.backend {
            Backend::Unbounded(map) => map.read().len(),
            Backend::Bounded(cache) => {
                cache.run_pending_tasks();
                cache.entry_count() as usize
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match &self.backend {
            Backend::Unbounded(map) => map.write().clear(),
            Backend::Bounded(cache) => {
                cache.invalidate_all();
                cache.run_pending_tasks();
            }
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self.backend, Backend::Bounded(_))
    }
}

impl Default for CompressionCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
