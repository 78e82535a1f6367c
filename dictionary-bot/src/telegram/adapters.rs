//! Converts transport-agnostic handler output into teloxide request types.

use dbot_core::{InlineAnswer, RenderedResult};
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultsButton, InlineQueryResultsButtonKind, InputMessageContent,
    InputMessageContentText, LinkPreviewOptions, ParseMode,
};
use tracing::warn;

use crate::handlers::{StartReply, START_PARAMETER};

const THUMBNAIL_SIZE: u32 = 48;

fn link_preview(enabled: bool) -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: !enabled,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// One article result; the body is sent with HTML parse mode.
pub fn to_inline_result(result: &RenderedResult) -> InlineQueryResult {
    let content = InputMessageContent::Text(
        InputMessageContentText::new(result.body.clone())
            .parse_mode(ParseMode::Html)
            .link_preview_options(link_preview(result.link_preview)),
    );

    let mut article =
        InlineQueryResultArticle::new(result.id.clone(), result.title.clone(), content)
            .description(result.description.clone());

    match reqwest::Url::parse(&result.thumbnail_url) {
        Ok(url) => {
            article = article
                .thumbnail_url(url)
                .thumbnail_width(THUMBNAIL_SIZE)
                .thumbnail_height(THUMBNAIL_SIZE);
        }
        Err(e) => {
            warn!(url = %result.thumbnail_url, error = %e, "Skipping invalid thumbnail URL");
        }
    }

    InlineQueryResult::Article(article)
}

pub fn to_inline_results(answer: &InlineAnswer) -> Vec<InlineQueryResult> {
    answer.results.iter().map(to_inline_result).collect()
}

/// Button above the results that opens a private chat with `/start`.
pub fn start_button(prompt: &str) -> InlineQueryResultsButton {
    InlineQueryResultsButton {
        text: prompt.to_string(),
        kind: InlineQueryResultsButtonKind::StartParameter(START_PARAMETER.to_string()),
    }
}

/// Single-button keyboard that starts an inline query in the current chat.
pub fn try_keyboard(reply: &StartReply) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::switch_inline_query_current_chat(
        reply.button_text.clone(),
        reply.button_query.clone(),
    )]])
}
