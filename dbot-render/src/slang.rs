//! Slang entry body.
//!
//! Community definitions mark cross-references as `[phrase]`. Each one becomes a link to a
//! search for that phrase on the slang site; everything else is escaped.

use std::fmt::Write;
use std::sync::LazyLock;

use dbot_core::SlangEntry;
use regex::Regex;
use url::Url;

use crate::sanitize::{escape_html, link, normalize_newlines};

/// Default page used for bracketed cross-reference links.
pub const DEFAULT_SLANG_SITE_URL: &str = "https://www.urbandictionary.com/define.php";

/// Zero-width space appended to every slang body.
pub const TRAILING_MARKER: char = '\u{200B}';

/// `[phrase]` with at most 100 characters and no nested brackets.
static BRACKET_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]\n]{1,100})\]").expect("invalid regex"));

/// `<site>?term=<phrase>`, or `None` when the site URL does not parse.
fn search_url(site_url: &str, phrase: &str) -> Option<Url> {
    Url::parse_with_params(site_url, &[("term", phrase)]).ok()
}

/// Escapes `text` and turns every bracketed phrase into a search link.
pub fn link_brackets(text: &str, site_url: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in BRACKET_PHRASE.captures_iter(text) {
        let (Some(whole), Some(phrase)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&escape_html(&text[last..whole.start()]));
        match search_url(site_url, phrase.as_str()) {
            Some(url) => out.push_str(&link(url.as_str(), phrase.as_str())),
            None => out.push_str(&escape_html(phrase.as_str())),
        }
        last = whole.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Full body for one slang entry; `rank` is 1-based.
///
/// Thumbs and author are always shown, even when zero or defaulted.
pub fn render_slang_entry(entry: &SlangEntry, word: &str, rank: usize, site_url: &str) -> String {
    let headword = if entry.word.trim().is_empty() {
        word
    } else {
        entry.word.as_str()
    };

    let mut out = format!(
        "🏙️ <b>{}</b> (Urban #{rank})\n\n",
        escape_html(headword)
    );
    out.push_str(&link_brackets(
        &normalize_newlines(&entry.definition),
        site_url,
    ));
    out.push('\n');

    if let Some(example) = &entry.example {
        let example = normalize_newlines(example);
        if !example.is_empty() {
            let _ = write!(
                out,
                "\n<b>Example</b>:\n<i>{}</i>\n",
                link_brackets(&example, site_url)
            );
        }
    }

    let _ = write!(
        out,
        "\n👍 {}  👎 {}\n✍️ by {}",
        entry.thumbs_up,
        entry.thumbs_down,
        escape_html(&entry.author)
    );
    if let Some(permalink) = &entry.permalink {
        let _ = write!(out, "\n🔗 {}", link(permalink, "View on Urban Dictionary"));
    }
    out.push(TRAILING_MARKER);
    out
}
