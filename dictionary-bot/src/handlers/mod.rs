//! Transport-agnostic handlers for `/start` and inline queries.
//!
//! They take the shared [`crate::BotContext`] and return plain values; the Telegram layer in
//! [`crate::telegram`] turns those into API calls.

mod inline_query;
mod start;

pub use inline_query::{
    answer_for_result, empty_query_answer, handle_inline_query, EMPTY_QUERY_CACHE_SECS,
    START_PARAMETER, START_PROMPT,
};
pub use start::{handle_start_command, welcome_text, StartReply, TRY_WORD};
