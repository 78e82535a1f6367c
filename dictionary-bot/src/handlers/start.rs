//! `/start` welcome message.

use dbot_render::escape_html;

use crate::context::BotContext;

/// Word pre-filled by the "Try" button.
pub const TRY_WORD: &str = "dictionary";

/// Welcome text plus the inline-query button shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReply {
    /// HTML body.
    pub text: String,
    pub button_text: String,
    /// Inline query the button starts in the current chat.
    pub button_query: String,
}

/// HTML welcome naming the bot, its version and the three sources.
pub fn welcome_text(bot_username: &str, version: &str) -> String {
    let username = escape_html(bot_username);
    let version = escape_html(version);
    format!(
        "👋 Welcome to @{username} v{version}!\n\n\
         📚 This bot finds definitions for words using multiple sources:\n\
         • Standard dictionary definitions\n\
         • A local lexical database (WordNet-style)\n\
         • Urban Dictionary for slang and colloquial terms\n\n\
         🔎 How to use:\n\
         1. Type <code>@{username}</code> followed by a word in any chat\n\
         2. Select one of the definitions that appear\n\
         3. The definition is sent to the chat\n\n\
         ✨ Features:\n\
         • Pronunciations and audio links\n\
         • Multiple meanings with examples\n\
         • Synonyms and antonyms\n\
         • Slang results for modern terms\n\n\
         Try it now with the button below!"
    )
}

/// Builds the `/start` reply. Falls back to a generic name when the username is not known yet.
pub async fn handle_start_command(ctx: &BotContext) -> StartReply {
    let username = ctx
        .bot_username()
        .await
        .unwrap_or_else(|| "dictionary_bot".to_string());
    StartReply {
        text: welcome_text(&username, &ctx.version),
        button_text: format!("Try with '{TRY_WORD}'"),
        button_query: TRY_WORD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: Welcome text names the bot, version and every source.**
    #[test]
    fn test_welcome_text_mentions_sources() {
        let text = welcome_text("word_bot", "1.2.3");
        assert!(text.starts_with("👋 Welcome to @word_bot v1.2.3!"));
        assert!(text.contains("<code>@word_bot</code>"));
        assert!(text.contains("Standard dictionary"));
        assert!(text.contains("lexical database"));
        assert!(text.contains("Urban Dictionary"));
    }

    #[test]
    fn test_welcome_text_escapes_markup() {
        let text = welcome_text("a<b", "1");
        assert!(text.contains("@a&lt;b"));
    }
}
