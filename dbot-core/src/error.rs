//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error for configuration, transport and lexicon import failures.
//! Lookup failures never surface here: adapters turn them into "not found".

use thiserror::Error;

/// Top-level error for dbot (config, bot transport, lexicon import).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),
}
