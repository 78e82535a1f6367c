//! # dbot-sources
//!
//! The three lookup sources and the [`Aggregator`] that chains them.
//!
//! - [`DictionaryClient`] – REST dictionary API (`GET <base>/<word>`)
//! - [`SlangClient`] – slang dictionary API (`GET <base>?term=<word>`)
//! - [`LexicalStore`] – local WordNet-style SQLite database
//!
//! Every source implements one of the traits in [`source`]; the trait methods log and swallow
//! failures so a broken source only ever means "not found" for that source.

pub mod aggregator;
pub mod dictionary;
pub mod error;
pub mod lexical;
pub mod slang;
pub mod source;

pub use aggregator::{normalize_query, AggregateOutcome, Aggregator};
pub use dictionary::{DictionaryClient, DEFAULT_DICTIONARY_API_URL};
pub use error::SourceError;
pub use lexical::{LemmaRecord, LexicalStore, SynsetRecord};
pub use slang::{SlangClient, DEFAULT_SLANG_API_URL};
pub use source::{DictionarySource, LexicalSource, SlangSource};
