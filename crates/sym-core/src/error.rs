use crate::types::Stage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolectError {
    #[error("Input too short")]
    InputTooShort,
    #[error("{stage} stage failed: {reason}")]
    Stage { stage: Stage, reason: String },
    #[error("Non-finite confidence for glyph {glyph}")]
    NonFiniteConfidence { glyph: String },
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Glyph {glyph:?} contains the reserved joiner")]
    ReservedGlyph { glyph: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SymbolectError {
    /// Attribute an error to a pipeline stage. Errors that already carry a
    /// stage, and `InputTooShort`, pass through untouched.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            Self::InputTooShort | Self::Stage { .. } => self,
            other => Self::Stage { stage, reason: other.to_string() },
        }
    }
}

pub type Result<T> = std::result::Result<T, SymbolectError>;
