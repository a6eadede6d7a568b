//! Flow pattern table — regex triggers mapped to composite flow glyphs.

use regex::Regex;
use sym_core::{Result, SymbolectError, JOINER};

/// Static definition of a flow rule before compilation.
#[derive(Debug, Clone, Copy)]
pub struct FlowDef {
    pub trigger: &'static str,
    pub components: &'static [&'static str],
    pub flow: &'static str,
    pub description: &'static str,
    pub confidence: f64,
}

pub const BUILTIN_FLOWS: &[FlowDef] = &[
    FlowDef {
        trigger: r"login|auth|sign.?in|authenticate",
        components: &["🔐", "👤", "🚪"],
        flow: "🔐→👤→✅",
        description: "Authentication Flow",
        confidence: 0.9,
    },
    FlowDef {
        trigger: r"form|submit|save|create",
        components: &["📝", "💾", "✅"],
        flow: "📝→💾→✅",
        description: "Form Submission Flow",
        confidence: 0.8,
    },
    FlowDef {
        trigger: r"search|find|query|lookup",
        components: &["🔍", "🗄️", "📊"],
        flow: "🔍→🗄️→📊",
        description: "Search & Retrieval Flow",
        confidence: 0.8,
    },
    FlowDef {
        trigger: r"crud|create|read|update|delete",
        components: &["➕", "👁️", "🔄", "🗑️"],
        flow: "➕→👁️→🔄→🗑️",
        description: "CRUD Operations Flow",
        confidence: 0.9,
    },
    FlowDef {
        trigger: r"payment|checkout|purchase|buy",
        components: &["💳", "🛒", "✅"],
        flow: "💳→🛒→✅",
        description: "Payment Flow",
        confidence: 0.9,
    },
    FlowDef {
        trigger: r"upload|file|document|attachment",
        components: &["📤", "📁", "💾"],
        flow: "📤→📁→💾",
        description: "File Upload Flow",
        confidence: 0.8,
    },
    FlowDef {
        trigger: r"real.?time|live|streaming|websocket",
        components: &["⚡", "🔄", "📡"],
        flow: "⚡→🔄→📡",
        description: "Real-time Communication Flow",
        confidence: 0.8,
    },
    FlowDef {
        trigger: r"user.?management|admin|permissions",
        components: &["👥", "⚙️", "🛡️"],
        flow: "👥→⚙️→🛡️",
        description: "User Management Flow",
        confidence: 0.8,
    },
    FlowDef {
        trigger: r"notification|alert|email|message",
        components: &["🔔", "📧", "💬"],
        flow: "🔔→📧→💬",
        description: "Notification Flow",
        confidence: 0.7,
    },
    FlowDef {
        trigger: r"api|endpoint|service|microservice",
        components: &["🔌", "⚙️", "🌐"],
        flow: "🔌→⚙️→🌐",
        description: "API Service Flow",
        confidence: 0.8,
    },
];

/// A compiled flow rule.
#[derive(Debug, Clone)]
pub struct FlowPattern {
    pub pattern: Regex,
    /// Uncompiled trigger, as written in the definition.
    pub source: String,
    pub components: Vec<String>,
    pub flow: String,
    pub description: String,
    pub confidence: f64,
}

impl FlowPattern {
    pub fn compile(def: &FlowDef) -> Result<Self> {
        if def.flow.contains(JOINER) {
            return Err(SymbolectError::ReservedGlyph { glyph: def.flow.to_string() });
        }
        if !def.confidence.is_finite() {
            return Err(SymbolectError::NonFiniteConfidence { glyph: def.flow.to_string() });
        }
        let pattern = Regex::new(&format!("(?i){}", def.trigger)).map_err(|source| {
            SymbolectError::InvalidPattern { pattern: def.trigger.to_string(), source }
        })?;
        Ok(Self {
            pattern,
            source: def.trigger.to_string(),
            components: def.components.iter().map(|s| s.to_string()).collect(),
            flow: def.flow.to_string(),
            description: def.description.to_string(),
            confidence: def.confidence,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered, precompiled flow rules.
#[derive(Debug, Clone)]
pub struct FlowPatternTable {
    patterns: Vec<FlowPattern>,
}

impl FlowPatternTable {
    pub fn new(defs: &[FlowDef]) -> Result<Self> {
        let patterns = defs.iter().map(FlowPattern::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_FLOWS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
