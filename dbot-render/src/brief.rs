//! One-line descriptions shown under each inline result title.

use dbot_core::{LookupResult, SlangEntry};

use crate::sanitize::one_line;

/// Description used when the result carries no definition text.
pub const NO_DEFINITION: &str = "No definition available";

/// First definition of the highest-priority source as plain text, at most 100 characters.
///
/// Descriptions are displayed as plain text by the chat client, so nothing is HTML-escaped
/// here; brackets and line breaks are removed.
pub fn render_brief(result: &LookupResult, _word: &str) -> String {
    let first = match result {
        LookupResult::Dictionary { entry, .. } => entry
            .meanings
            .first()
            .and_then(|m| m.definitions.first())
            .map(|d| d.text.as_str()),
        LookupResult::Lexical { senses, .. } => senses.first().map(|s| s.definition.as_str()),
        LookupResult::SlangOnly { slang } => slang.first().map(|e| e.definition.as_str()),
        LookupResult::NotFound => None,
    };
    brief_or_default(first)
}

/// Description for one slang result.
pub fn brief_slang(entry: &SlangEntry) -> String {
    brief_or_default(Some(&entry.definition))
}

fn brief_or_default(text: Option<&str>) -> String {
    match text.map(one_line) {
        Some(line) if !line.is_empty() => line,
        _ => NO_DEFINITION.to_string(),
    }
}
