//! Symbolect engine — orchestrates detection, optimization, rendering and caching.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use sym_core::{
    CompressionResult, Context, Metadata, Result, Stage, Statistics, Symbol, SymbolectConfig,
    SymbolectError,
};
use tracing::{debug, info, warn};

use crate::cache::CompressionCache;
use crate::tables::RuleTables;
use crate::{builder, decompress, metrics, optimizer, stage1_direct, stage2_flow, stage3_contextual};

const PROCESSING_STAGES: u64 = 5;

/// Raw detector output, before optimization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Candidates {
    pub direct: Vec<Symbol>,
    pub flow: Vec<Symbol>,
    pub contextual: Vec<Symbol>,
}

impl Candidates {
    pub fn len(&self) -> usize {
        self.direct.len() + self.flow.len() + self.contextual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All candidates in stage order: direct, flow, contextual.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.direct.iter().chain(&self.flow).chain(&self.contextual)
    }

    pub fn into_ordered(self) -> Vec<Symbol> {
        let mut all = self.direct;
        all.extend(self.flow);
        all.extend(self.contextual);
        all
    }
}

/// The compression engine. Tables are immutable and shared; the cache is the
/// only mutable state.
pub struct SymbolectEngine {
    tables: Arc<RuleTables>,
    config: SymbolectConfig,
    cache: CompressionCache,
    pipeline_runs: AtomicU64,
}

impl SymbolectEngine {
    pub fn new() -> Self {
        Self::with_config(SymbolectConfig::default())
    }

    pub fn with_config(config: SymbolectConfig) -> Self {
        Self::with_tables(RuleTables::shared(), config)
    }

    pub fn with_tables(tables: Arc<RuleTables>, config: SymbolectConfig) -> Self {
        let cache = CompressionCache::with_capacity(config.cache.capacity);
        Self { tables, config, cache, pipeline_runs: AtomicU64::new(0) }
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn config(&self) -> &SymbolectConfig {
        &self.config
    }

    /// Compress `text` into glyphs. Never fails: problems come back as a
    /// zero-value result with `metadata.error` set.
    pub fn compress(&self, text: &str, context: Option<&Context>) -> CompressionResult {
        if text.trim().chars().count() < self.config.min_input_chars {
            return CompressionResult::degraded(text, SymbolectError::InputTooShort.to_string());
        }

        let key = match CompressionCache::key(text, context) {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "Failed to derive cache key");
                return CompressionResult::degraded(text, e.to_string());
            }
        };

        if let Some(hit) = self.cache.get(key) {
            debug!(key, "Cache hit");
            return (*hit).clone();
        }
        debug!(key, "Cache miss");

        match self.run_pipeline(text, context) {
            Ok(result) => {
                self.cache.insert(key, Arc::new(result.clone()));
                result
            }
            Err(e) => {
                warn!(error = %e, "Compression degraded");
                CompressionResult::degraded(text, e.to_string())
            }
        }
    }

    /// Run the three detectors without optimizing or caching.
    pub fn detect_candidates(&self, text: &str, context: Option<&Context>) -> Result<Candidates> {
        let direct = stage1_direct::detect(text, &self.tables.catalog)
            .map_err(|e| e.in_stage(Stage::Direct))?;
        let flow = stage2_flow::detect(text, &self.tables.flows).map_err(|e| e.in_stage(Stage::Flow))?;
        let contextual = stage3_contextual::detect(text, context, &self.tables.contextual)
            .map_err(|e| e.in_stage(Stage::Contextual))?;
        debug!(
            direct = direct.len(),
            flow = flow.len(),
            contextual = contextual.len(),
            "Detected candidates"
        );
        Ok(Candidates { direct, flow, contextual })
    }

    fn run_pipeline(&self, text: &str, context: Option<&Context>) -> Result<CompressionResult> {
        self.pipeline_runs.fetch_add(1, Ordering::Relaxed);

        let candidates = self.detect_candidates(text, context)?;
        let mut metadata = Metadata::new();
        metadata.insert("processing_stages".into(), json!(PROCESSING_STAGES));
        metadata.insert("direct_symbols".into(), json!(candidates.direct.len()));
        metadata.insert("flow_symbols".into(), json!(candidates.flow.len()));
        metadata.insert("contextual_symbols".into(), json!(candidates.contextual.len()));

        let total = candidates.len();
        let symbols = optimizer::optimize(candidates.into_ordered(), self.config.max_symbols)
            .map_err(|e| e.in_stage(Stage::Optimize))?;
        metadata.insert("optimization_applied".into(), json!(total != symbols.len()));

        let compressed = builder::build(&symbols);
        let compression_ratio = metrics::compression_ratio(text, &compressed);
        let confidence = metrics::confidence(&symbols, text);

        Ok(CompressionResult {
            original_text: text.to_string(),
            compressed,
            symbols,
            compression_ratio,
            confidence,
            metadata,
        })
    }

    /// Describe a compressed string. The context is accepted for symmetry with
    /// `compress` and does not influence the output.
    pub fn decompress(&self, compressed: &str, _context: Option<&Context>) -> String {
        decompress::decompress(compressed, &self.tables.catalog)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_symbols: self.tables.catalog.len(),
            category_counts: self.tables.catalog.category_counts(),
            flow_pattern_count: self.tables.flows.len(),
            contextual_rule_count: self.tables.contextual.combinations.len(),
            cache_size: self.cache.len(),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Symbolect cache cleared");
    }

    /// Number of times the full pipeline ran, i.e. cache misses that were computed.
    pub fn pipeline_runs(&self) -> u64 {
        self.pipeline_runs.load(Ordering::Relaxed)
    }
}

impl Default for SymbolectEngine {
    fn default() -> Self {
        Self::new()
    }
}
