//! Main entry: validate config, init logging, build the context, then poll.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::init_tracing;
use teloxide::prelude::*;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;
use crate::context::BotContext;
use crate::telegram::run_dispatcher;

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_bot(config: &BotConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .with_context(|| format!("Parse Telegram API URL {url}"))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Runs the bot until Ctrl+C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let ctx = Arc::new(BotContext::from_config(&config).await?);
    let bot = build_bot(&config)?;

    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            ctx.set_bot_username(username.clone()).await;
            info!(version = %ctx.version, username = %username, "Starting Dictionary Bot");
        }
        Err(e) => {
            warn!(error = %e, version = %ctx.version, "get_me failed, starting without username");
        }
    }

    run_dispatcher(bot, ctx).await;
    info!("Bot stopped");
    Ok(())
}
