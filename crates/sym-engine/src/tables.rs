//! The frozen rule tables, compiled once and shared between engines.

use std::sync::{Arc, LazyLock};

use sym_core::Result;

use crate::catalog::SymbolCatalog;
use crate::contextual::ContextualRuleTable;
use crate::flow::FlowPatternTable;

#[derive(Debug)]
pub struct RuleTables {
    pub catalog: SymbolCatalog,
    pub flows: FlowPatternTable,
    pub contextual: ContextualRuleTable,
}

impl RuleTables {
    pub fn new(
        catalog: SymbolCatalog,
        flows: FlowPatternTable,
        contextual: ContextualRuleTable,
    ) -> Self {
        Self { catalog, flows, contextual }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            SymbolCatalog::builtin()?,
            FlowPatternTable::builtin()?,
            ContextualRuleTable::builtin()?,
        ))
    }

    /// Process-wide instance of the built-in tables.
    pub fn shared() -> Arc<RuleTables> {
        Arc::clone(&BUILTIN_TABLES)
    }
}

static BUILTIN_TABLES: LazyLock<Arc<RuleTables>> = LazyLock::new(|| {
    Arc::new(RuleTables::builtin().expect("built-in rule tables are well-formed"))
});
