//! Bot configuration: BaseConfig (Telegram + log) + LookupConfig (sources) + InlineConfig
//! (inline answers). Everything is loaded from env once at startup.

mod base;
mod bot_config;
mod inline;
mod lookup;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use inline::InlineConfig;
pub use lookup::LookupConfig;

use std::env;
use std::str::FromStr;

/// Reads `name` and parses it; unset or unparsable values fall back to `default`.
pub(crate) fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads `name` as a string, falling back to `default` when unset or blank.
pub(crate) fn env_string_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Fails unless `value` parses as an absolute http(s) URL.
pub(crate) fn check_http_url(name: &str, value: &str) -> anyhow::Result<()> {
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(dbot_core::DbotError::Config(format!(
            "{} is not a valid http(s) URL: {}",
            name, value
        ))
        .into()),
    }
}
