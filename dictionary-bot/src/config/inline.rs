//! Inline answer config: debounce, cache time, slang cap, links and version string.

use anyhow::Result;
use dbot_render::{RenderSettings, DEFAULT_SLANG_SITE_URL, MAX_RESULTS, PRIMARY_SLOTS};
use std::time::Duration;

use super::{check_http_url, env_or, env_string_or};

const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct InlineConfig {
    /// INLINE_QUERY_DEBOUNCE_MS
    pub debounce_ms: u64,
    /// INLINE_RESULTS_CACHE_TIME (seconds), for non-empty queries.
    pub cache_time_secs: u32,
    /// MAX_SLANG_RESULTS; at most 18 are ever shown.
    pub max_slang_results: usize,
    /// SLANG_SITE_URL, target of bracketed cross-reference links.
    pub slang_site_url: String,
    /// BOT_VERSION, shown in /start.
    pub bot_version: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            cache_time_secs: 300,
            max_slang_results: 10,
            slang_site_url: DEFAULT_SLANG_SITE_URL.to_string(),
            bot_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl InlineConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            debounce_ms: env_or("INLINE_QUERY_DEBOUNCE_MS", defaults.debounce_ms),
            cache_time_secs: env_or("INLINE_RESULTS_CACHE_TIME", defaults.cache_time_secs),
            max_slang_results: env_or("MAX_SLANG_RESULTS", defaults.max_slang_results),
            slang_site_url: env_string_or("SLANG_SITE_URL", &defaults.slang_site_url),
            bot_version: env_string_or("BOT_VERSION", &defaults.bot_version),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            max_slang_results: self.max_slang_results.min(MAX_RESULTS - PRIMARY_SLOTS),
            slang_site_url: self.slang_site_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_http_url("SLANG_SITE_URL", &self.slang_site_url)?;
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            anyhow::bail!(
                "INLINE_QUERY_DEBOUNCE_MS must be at most {}, got {}",
                MAX_DEBOUNCE_MS,
                self.debounce_ms
            );
        }
        Ok(())
    }
}
