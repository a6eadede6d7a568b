//! Symbolect core — value types, errors and configuration shared by the engine.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CacheConfig, SymbolectConfig};
pub use error::{Result, SymbolectError};
pub use types::*;
