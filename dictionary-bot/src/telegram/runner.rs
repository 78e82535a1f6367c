//! Dispatcher: routes `/start` and inline queries to the handlers. Each inline query is processed
//! on its own task so debouncing never blocks the update loop.

use std::sync::Arc;

use dbot_core::{DbotError, InlineAnswer};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::payloads::{AnswerInlineQuerySetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{InlineQuery, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, instrument};

use super::adapters::{start_button, to_inline_results, try_keyboard};
use crate::context::BotContext;
use crate::handlers::{handle_inline_query, handle_start_command};

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Dictionary bot commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "show the welcome message")]
    Help,
}

/// Handler tree: bot commands from messages, and inline queries.
pub fn build_handler() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_inline_query().endpoint(on_inline_query))
}

async fn on_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> anyhow::Result<()> {
    info!(chat_id = msg.chat.id.0, command = ?cmd, "Received command");
    let reply = handle_start_command(&ctx).await;
    bot.send_message(msg.chat.id, reply.text.clone())
        .parse_mode(ParseMode::Html)
        .reply_markup(try_keyboard(&reply))
        .await?;
    Ok(())
}

async fn on_inline_query(bot: Bot, query: InlineQuery, ctx: Arc<BotContext>) -> anyhow::Result<()> {
    let user_id = query.from.id.0;
    info!(user_id = user_id, query = %query.query, "Received inline query");

    tokio::spawn(async move {
        let Some(answer) = handle_inline_query(&ctx, user_id, &query.query).await else {
            return;
        };
        if let Err(e) = send_answer(&bot, &query, &answer).await {
            error!(error = %e, user_id = user_id, "Failed to answer inline query");
        }
    });
    Ok(())
}

/// Sends `answer` for `query`, adding the start button when the answer carries a prompt.
pub async fn send_answer(
    bot: &Bot,
    query: &InlineQuery,
    answer: &InlineAnswer,
) -> Result<(), DbotError> {
    let mut request = bot
        .answer_inline_query(query.id.clone(), to_inline_results(answer))
        .cache_time(answer.cache_time_secs);
    if let Some(prompt) = &answer.start_prompt {
        request = request.button(start_button(prompt));
    }
    request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
    debug!(
        user_id = query.from.id.0,
        result_count = answer.results.len(),
        cache_time_secs = answer.cache_time_secs,
        "Inline answer sent"
    );
    Ok(())
}

/// Runs long polling until Ctrl+C.
#[instrument(skip(bot, ctx))]
pub async fn run_dispatcher(bot: Bot, ctx: Arc<BotContext>) {
    Dispatcher::builder(bot, build_handler())
        .dependencies(dptree::deps![ctx])
        .default_handler(|upd| async move {
            debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
