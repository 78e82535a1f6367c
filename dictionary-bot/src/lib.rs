//! # Dictionary bot application
//!
//! Wires the lookup sources (dbot-sources) and renderers (dbot-render) into a Telegram inline
//! bot. Loads config from env, debounces inline queries per user, and answers them with a
//! ranked list of dictionary, lexical and slang results.

pub mod cli;
pub mod config;
pub mod context;
pub mod debounce;
pub mod handlers;
pub mod import;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, InlineConfig, LookupConfig};
pub use context::BotContext;
pub use debounce::{QueryDebouncer, QueryTicket};
pub use handlers::{handle_inline_query, handle_start_command, StartReply};
pub use import::import_lexicon;
pub use runner::{build_bot, run_bot};
