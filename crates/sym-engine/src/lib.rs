//! Symbolect engine — deterministic symbolic compression of feature descriptions.
//!
//! Stages:
//! 1. Direct — catalog lookup per word token
//! 2. Flow — regex triggers mapped to composite flow glyphs
//! 3. Contextual — keyword co-occurrence and caller context hints
//! 4. Optimize — dedup by glyph, rank by `confidence * weight`, truncate
//! 5. Build — render glyph segments joined by the reserved joiner
//!
//! Results are memoized per `(text, context)` until the cache is cleared.

pub mod builder;
pub mod cache;
pub mod catalog;
pub mod contextual;
pub mod decompress;
pub mod flow;
pub mod metrics;
pub mod optimizer;
pub mod pipeline;
pub mod stage1_direct;
pub mod stage2_flow;
pub mod stage3_contextual;
pub mod tables;

pub use cache::CompressionCache;
pub use catalog::SymbolCatalog;
pub use contextual::ContextualRuleTable;
pub use flow::{FlowPattern, FlowPatternTable};
pub use pipeline::{Candidates, SymbolectEngine};
pub use tables::RuleTables;
