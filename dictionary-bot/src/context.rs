//! Shared state handed to every handler behind an `Arc`.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_render::RenderSettings;
use dbot_sources::{Aggregator, DictionaryClient, LexicalStore, SlangClient};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::{BotConfig, InlineConfig};
use crate::debounce::QueryDebouncer;

/// Built once at startup; read-only apart from the debouncer and the cached bot username.
pub struct BotContext {
    pub aggregator: Aggregator,
    pub debouncer: QueryDebouncer,
    pub render: RenderSettings,
    /// Cache time for answers to non-empty queries.
    pub cache_time_secs: u32,
    pub version: String,
    /// Filled from `get_me` before polling starts.
    pub bot_username: RwLock<Option<String>>,
}

impl BotContext {
    /// Builds a context around an existing aggregator (tests inject fake sources here).
    pub fn new(aggregator: Aggregator, inline: &InlineConfig) -> Self {
        Self {
            aggregator,
            debouncer: QueryDebouncer::new(inline.debounce()),
            render: inline.render_settings(),
            cache_time_secs: inline.cache_time_secs,
            version: inline.bot_version.clone(),
            bot_username: RwLock::new(None),
        }
    }

    /// Creates the HTTP clients and opens the lexical database described by `config`.
    pub async fn from_config(config: &BotConfig) -> Result<Self> {
        let lookup = &config.lookup;
        let timeout = lookup.source_timeout();

        let dictionary = DictionaryClient::new(&lookup.dictionary_api_url, timeout)
            .context("Create dictionary client")?;
        let slang =
            SlangClient::new(&lookup.slang_api_url, timeout).context("Create slang client")?;
        let lexical = open_lexical_store(&lookup.lexical_db_path).await?;

        info!(
            dictionary_api_url = %lookup.dictionary_api_url,
            slang_api_url = %lookup.slang_api_url,
            lexical_db_path = %lookup.lexical_db_path,
            timeout_secs = lookup.source_timeout_secs,
            "Lookup sources ready"
        );

        let aggregator = Aggregator::new(
            Arc::new(dictionary),
            Arc::new(lexical),
            Arc::new(slang),
            timeout,
        );
        Ok(Self::new(aggregator, &config.inline))
    }

    pub async fn set_bot_username(&self, username: String) {
        *self.bot_username.write().await = Some(username);
    }

    pub async fn bot_username(&self) -> Option<String> {
        self.bot_username.read().await.clone()
    }
}

/// Opens the lexical SQLite file, creating its parent directory first.
pub async fn open_lexical_store(path: &str) -> Result<LexicalStore> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Create directory for lexical database {path}"))?;
        }
    }
    LexicalStore::open(path)
        .await
        .with_context(|| format!("Open lexical database {path}"))
}
