//! Source traits used by the [`crate::Aggregator`].
//!
//! Implementations return `None` for "not found" and for any failure; they log the failure
//! themselves. Tests substitute in-memory implementations.

use async_trait::async_trait;
use dbot_core::{DictionaryEntry, LexicalSense, SlangEntry};

/// REST dictionary lookup: one entry per word.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    async fn lookup(&self, word: &str) -> Option<DictionaryEntry>;
}

/// Local lexical database lookup: ordered senses, never empty when `Some`.
#[async_trait]
pub trait LexicalSource: Send + Sync {
    async fn lookup(&self, word: &str) -> Option<Vec<LexicalSense>>;
}

/// Slang dictionary lookup: entries in source order, never empty when `Some`.
#[async_trait]
pub trait SlangSource: Send + Sync {
    async fn lookup(&self, word: &str) -> Option<Vec<SlangEntry>>;
}
