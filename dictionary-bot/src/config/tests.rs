//! Config tests.

use crate::config::BotConfig;
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "DICTIONARY_API_URL",
    "SLANG_API_URL",
    "SLANG_SITE_URL",
    "LEXICAL_DB_PATH",
    "SOURCE_TIMEOUT_SECS",
    "INLINE_QUERY_DEBOUNCE_MS",
    "INLINE_RESULTS_CACHE_TIME",
    "MAX_SLANG_RESULTS",
    "BOT_VERSION",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/dictionary-bot.log");
    assert_eq!(
        config.lookup.dictionary_api_url,
        "https://api.dictionaryapi.dev/api/v2/entries/en"
    );
    assert_eq!(
        config.lookup.slang_api_url,
        "https://api.urbandictionary.com/v0/define"
    );
    assert_eq!(config.lookup.lexical_db_path, "./data/lexicon.db");
    assert_eq!(config.lookup.source_timeout_secs, 5);
    assert_eq!(config.inline.debounce_ms, 300);
    assert_eq!(config.inline.cache_time_secs, 300);
    assert_eq!(config.inline.max_slang_results, 10);
    assert_eq!(config.inline.bot_version, env!("CARGO_PKG_VERSION"));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("LEXICAL_DB_PATH", "/tmp/wn.db");
    env::set_var("SOURCE_TIMEOUT_SECS", "2");
    env::set_var("INLINE_QUERY_DEBOUNCE_MS", "150");
    env::set_var("INLINE_RESULTS_CACHE_TIME", "60");
    env::set_var("MAX_SLANG_RESULTS", "25");
    env::set_var("BOT_VERSION", "2.1.0");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    assert_eq!(config.lookup.lexical_db_path, "/tmp/wn.db");
    assert_eq!(config.lookup.source_timeout_secs, 2);
    assert_eq!(config.inline.debounce_ms, 150);
    assert_eq!(config.inline.cache_time_secs, 60);
    assert_eq!(config.inline.max_slang_results, 25);
    assert_eq!(config.inline.render_settings().max_slang_results, 18);
    assert_eq!(config.inline.bot_version, "2.1.0");

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "t");
    env::set_var("INLINE_RESULTS_CACHE_TIME", "soon");
    env::set_var("MAX_SLANG_RESULTS", "-3");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.inline.cache_time_secs, 300);
    assert_eq!(config.inline.max_slang_results, 10);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
    assert!(BotConfig::load(Some("  ".to_string())).is_err());
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_source_settings() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    env::set_var("DICTIONARY_API_URL", "ftp://example.com/dict");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    env::remove_var("DICTIONARY_API_URL");

    env::set_var("SOURCE_TIMEOUT_SECS", "0");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    env::remove_var("SOURCE_TIMEOUT_SECS");

    env::set_var("INLINE_QUERY_DEBOUNCE_MS", "60000");
    assert!(BotConfig::load(None).unwrap().validate().is_err());

    clear_env();
}
