//! Inline query flow: normalize, debounce, aggregate, render.

use dbot_core::{InlineAnswer, LookupResult};
use dbot_render::build_result_list;
use dbot_sources::{normalize_query, AggregateOutcome};
use tracing::{debug, error, info, instrument};

use crate::context::BotContext;

/// Cache time for the empty-query answer.
pub const EMPTY_QUERY_CACHE_SECS: u32 = 5;

/// Button text shown for an empty query; opens a private chat with the bot.
pub const START_PROMPT: &str = "Type a word to look up";

/// `/start` parameter carried by that button.
pub const START_PARAMETER: &str = "start";

pub fn empty_query_answer() -> InlineAnswer {
    InlineAnswer {
        results: Vec::new(),
        cache_time_secs: EMPTY_QUERY_CACHE_SECS,
        start_prompt: Some(START_PROMPT.to_string()),
    }
}

/// Renders `result` with the context's settings and cache time.
pub fn answer_for_result(result: &LookupResult, word: &str, ctx: &BotContext) -> InlineAnswer {
    InlineAnswer {
        results: build_result_list(result, word, &ctx.render),
        cache_time_secs: ctx.cache_time_secs,
        start_prompt: None,
    }
}

/// Handles one inline query from `user_id`.
///
/// Returns `None` when a newer query from the same user arrived while this one was waiting
/// out the debounce delay or still looking up; nothing must be sent in that case.
#[instrument(skip(ctx))]
pub async fn handle_inline_query(ctx: &BotContext, user_id: u64, raw: &str) -> Option<InlineAnswer> {
    let word = normalize_query(raw);
    let ticket = ctx.debouncer.begin(user_id).await;

    if word.is_empty() {
        ctx.debouncer.finish(&ticket).await;
        debug!(user_id = user_id, "Empty inline query");
        return Some(empty_query_answer());
    }

    if !ctx.debouncer.settle(&ticket).await {
        return None;
    }

    let result = lookup_isolated(ctx, &word).await;

    if !ctx.debouncer.is_current(&ticket).await {
        debug!(user_id = user_id, word = %word, "Query superseded during lookup, dropping result");
        return None;
    }
    ctx.debouncer.finish(&ticket).await;

    let answer = answer_for_result(&result, &word, ctx);
    info!(
        user_id = user_id,
        word = %word,
        source = result.kind().as_str(),
        result_count = answer.results.len(),
        "Inline answer ready"
    );
    Some(answer)
}

/// Runs the aggregation on its own task so a panic inside one lookup only affects this query;
/// a panicked or cancelled lookup is reported as not found.
async fn lookup_isolated(ctx: &BotContext, word: &str) -> LookupResult {
    let aggregator = ctx.aggregator.clone();
    let query = word.to_string();
    match tokio::spawn(async move { aggregator.aggregate(&query).await }).await {
        Ok(AggregateOutcome::Completed(result)) => result,
        Ok(AggregateOutcome::NoQuery) => LookupResult::NotFound,
        Err(e) => {
            error!(
                word = %word,
                panicked = e.is_panic(),
                error = %e,
                "Lookup task failed"
            );
            LookupResult::NotFound
        }
    }
}
