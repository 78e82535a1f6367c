//! Builds the ordered inline result list for one aggregated lookup.
//!
//! Order: primary basic, optional primary detailed, then slang entries in source order.
//! At most [`MAX_RESULTS`] entries; slang gets whatever the primary slots leave, further
//! capped by [`RenderSettings::max_slang_results`].

use dbot_core::{LookupResult, RenderedResult, SlangEntry};
use tracing::debug;

use crate::brief::{brief_slang, render_brief};
use crate::sanitize::{
    capitalize, clip_body, collapse_whitespace, escape_html, one_line, MAX_BODY_CHARS,
};
use crate::slang::{render_slang_entry, DEFAULT_SLANG_SITE_URL, TRAILING_MARKER};
use crate::{dictionary, lexical};

/// Upper bound on results in one inline answer.
pub const MAX_RESULTS: usize = 20;

/// Slots reserved for the primary basic and detailed results. Slang never uses them, even when
/// there is no primary result.
pub const PRIMARY_SLOTS: usize = 2;

pub const THUMB_DICTIONARY: &str = "https://img.icons8.com/color/48/000000/book.png";
pub const THUMB_DETAILED: &str = "https://img.icons8.com/color/48/000000/info.png";
pub const THUMB_LEXICAL: &str = "https://img.icons8.com/color/48/000000/graduation-cap.png";
pub const THUMB_SLANG: &str = "https://img.icons8.com/color/48/000000/city.png";
pub const THUMB_NOT_FOUND: &str = "https://img.icons8.com/color/48/000000/cancel.png";

const DETAILED_DESCRIPTION: &str = "View all meanings, examples, and related words";

/// Per-deployment knobs for the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub max_slang_results: usize,
    /// Page that bracketed slang cross-references link to.
    pub slang_site_url: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_slang_results: 10,
            slang_site_url: DEFAULT_SLANG_SITE_URL.to_string(),
        }
    }
}

/// True when `detailed` differs from `basic` and is more than 1.2 times as long (in chars).
pub fn should_offer_detailed(basic: &str, detailed: &str) -> bool {
    let basic_len = basic.chars().count();
    let detailed_len = detailed.chars().count();
    detailed != basic && detailed_len * 5 > basic_len * 6
}

/// The single result shown when nothing was found.
pub fn not_found_result(word: &str) -> RenderedResult {
    RenderedResult {
        id: "not_found".to_string(),
        title: "❌ Word not found".to_string(),
        description: one_line(&format!("No definition found for '{word}'")),
        body: format!("❌ No definition found for <b>{}</b>", escape_html(word)),
        thumbnail_url: THUMB_NOT_FOUND.to_string(),
        link_preview: false,
    }
}

/// `Word • /phonetic/` with the phonetic's own slashes normalised.
fn dictionary_title(display: &str, phonetic: Option<&str>) -> String {
    match phonetic.map(|p| p.trim().trim_matches('/')) {
        Some(p) if !p.is_empty() => format!("📚 {display} • /{p}/").replace("//", "/"),
        _ => format!("📚 {display}"),
    }
}

fn primary_results(
    result: &LookupResult,
    word: &str,
    title: String,
    thumbnail: &str,
    basic: String,
    detailed: String,
) -> Vec<RenderedResult> {
    let display = capitalize(word);
    let basic = clip_body(&basic, MAX_BODY_CHARS);
    let detailed = clip_body(&detailed, MAX_BODY_CHARS);
    let offer_detailed = should_offer_detailed(&basic, &detailed);
    let mut results = vec![RenderedResult {
        id: "1".to_string(),
        title,
        description: render_brief(result, word),
        body: basic,
        thumbnail_url: thumbnail.to_string(),
        link_preview: true,
    }];
    if offer_detailed {
        results.push(RenderedResult {
            id: "2".to_string(),
            title: format!("ℹ️ Detailed information for '{display}'"),
            description: DETAILED_DESCRIPTION.to_string(),
            body: detailed,
            thumbnail_url: THUMB_DETAILED.to_string(),
            link_preview: true,
        });
    }
    results
}

fn slang_result(entry: &SlangEntry, word: &str, index: usize, site_url: &str) -> RenderedResult {
    let rank = index + 1;
    let headword = match collapse_whitespace(&entry.word) {
        w if w.is_empty() => word.to_string(),
        w => w,
    };
    let rendered = render_slang_entry(entry, word, rank, site_url);
    let unmarked = rendered.strip_suffix(TRAILING_MARKER).unwrap_or(&rendered);
    let mut body = clip_body(unmarked, MAX_BODY_CHARS - 1);
    body.push(TRAILING_MARKER);
    RenderedResult {
        id: format!("slang_{index}"),
        title: format!("🏙️ {headword} (Urban #{rank})"),
        description: brief_slang(entry),
        body,
        thumbnail_url: THUMB_SLANG.to_string(),
        link_preview: false,
    }
}

/// Turns one lookup into inline results. Never returns more than [`MAX_RESULTS`] entries and
/// never returns an empty list.
pub fn build_result_list(
    result: &LookupResult,
    word: &str,
    settings: &RenderSettings,
) -> Vec<RenderedResult> {
    let display = capitalize(word);
    let mut results = match result {
        LookupResult::Dictionary { entry, .. } => primary_results(
            result,
            word,
            dictionary_title(&display, entry.phonetic.as_deref()),
            THUMB_DICTIONARY,
            dictionary::render_basic(entry, word),
            dictionary::render_detailed(entry, word),
        ),
        LookupResult::Lexical { senses, .. } => primary_results(
            result,
            word,
            format!("📚 {display} (Lexical)"),
            THUMB_LEXICAL,
            lexical::render_basic(senses, word),
            lexical::render_detailed(senses, word),
        ),
        LookupResult::SlangOnly { .. } => Vec::new(),
        LookupResult::NotFound => return vec![not_found_result(word)],
    };

    let slang_limit = (MAX_RESULTS - PRIMARY_SLOTS).min(settings.max_slang_results);
    results.extend(
        result
            .slang()
            .iter()
            .take(slang_limit)
            .enumerate()
            .map(|(i, entry)| slang_result(entry, word, i, &settings.slang_site_url)),
    );

    if results.is_empty() {
        results.push(not_found_result(word));
    }

    debug!(
        word = %word,
        source = result.kind().as_str(),
        count = results.len(),
        "Built inline result list"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_offer_detailed() {
        assert!(!should_offer_detailed("abcde", "abcde"));
        assert!(!should_offer_detailed(&"a".repeat(100), &"a".repeat(120)));
        assert!(should_offer_detailed(&"a".repeat(100), &"a".repeat(121)));
    }

    #[test]
    fn test_dictionary_title_normalises_slashes() {
        assert_eq!(dictionary_title("Hello", Some("/həˈləʊ/")), "📚 Hello • /həˈləʊ/");
        assert_eq!(dictionary_title("Hello", Some("həˈləʊ")), "📚 Hello • /həˈləʊ/");
        assert_eq!(dictionary_title("Hello", Some("  ")), "📚 Hello");
        assert_eq!(dictionary_title("Hello", None), "📚 Hello");
    }

    /// **Test: Not-found result escapes the word in the body only.**
    #[test]
    fn test_not_found_result() {
        let r = not_found_result("<b>x");
        assert_eq!(r.id, "not_found");
        assert_eq!(r.description, "No definition found for '<b>x'");
        assert_eq!(r.body, "❌ No definition found for <b>&lt;b&gt;x</b>");
        assert!(!r.link_preview);
    }

    /// **Test: Brackets in the query do not leak into the not-found description.**
    #[test]
    fn test_not_found_description_strips_brackets() {
        let r = not_found_result("[foo]  bar");
        assert_eq!(r.description, "No definition found for 'foo bar'");
        assert_eq!(r.body, "❌ No definition found for <b>[foo]  bar</b>");
    }
}
