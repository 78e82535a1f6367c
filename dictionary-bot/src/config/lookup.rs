//! Lookup config: where the three sources live and how long each call may take.

use anyhow::Result;
use dbot_sources::{DEFAULT_DICTIONARY_API_URL, DEFAULT_SLANG_API_URL};
use std::time::Duration;

use super::{check_http_url, env_or, env_string_or};

const MAX_SOURCE_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// DICTIONARY_API_URL; the word is appended as a path segment.
    pub dictionary_api_url: String,
    /// SLANG_API_URL; the word is sent as `?term=`.
    pub slang_api_url: String,
    /// LEXICAL_DB_PATH (SQLite file, created if missing)
    pub lexical_db_path: String,
    /// SOURCE_TIMEOUT_SECS, applied to every source call.
    pub source_timeout_secs: u64,
}

impl LookupConfig {
    pub fn from_env() -> Self {
        Self {
            dictionary_api_url: env_string_or("DICTIONARY_API_URL", DEFAULT_DICTIONARY_API_URL),
            slang_api_url: env_string_or("SLANG_API_URL", DEFAULT_SLANG_API_URL),
            lexical_db_path: env_string_or("LEXICAL_DB_PATH", "./data/lexicon.db"),
            source_timeout_secs: env_or("SOURCE_TIMEOUT_SECS", 5),
        }
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_secs(self.source_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        check_http_url("DICTIONARY_API_URL", &self.dictionary_api_url)?;
        check_http_url("SLANG_API_URL", &self.slang_api_url)?;
        if self.lexical_db_path.trim().is_empty() {
            anyhow::bail!("LEXICAL_DB_PATH must not be empty");
        }
        if self.source_timeout_secs == 0 || self.source_timeout_secs > MAX_SOURCE_TIMEOUT_SECS {
            anyhow::bail!(
                "SOURCE_TIMEOUT_SECS must be between 1 and {}, got {}",
                MAX_SOURCE_TIMEOUT_SECS,
                self.source_timeout_secs
            );
        }
        Ok(())
    }
}
