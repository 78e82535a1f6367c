//! Local lexical database (WordNet-style synsets in SQLite).
//!
//! - [`store`] – [`LexicalStore`]: schema, sense lookup, import
//! - [`record`] – [`SynsetRecord`] / [`LemmaRecord`]: JSON import format

mod record;
mod store;

pub use record::{LemmaRecord, SynsetRecord};
pub use store::LexicalStore;
