//! # dbot-core
//!
//! Core types for the dictionary bot: the lookup data model ([`LookupResult`] and the per-source
//! entries), the rendered inline result, error types, and tracing initialization.
//! Transport-agnostic; used by dbot-sources, dbot-render and dictionary-bot.

pub mod error;
pub mod logger;
pub mod types;

pub use error::DbotError;
pub use logger::init_tracing;
pub use types::{
    Definition, DictionaryEntry, InlineAnswer, LexicalSense, LookupResult, Meaning,
    PartOfSpeech, RenderedResult, SlangEntry, SourceKind,
};
