//! Text helpers shared by every renderer: HTML escaping, truncation, whitespace and links.
//!
//! Bodies are sent with the chat platform's HTML parse mode, which accepts a small tag subset
//! (`<b>`, `<i>`, `<a href>`, `<code>`). Any source or user text embedded in a body goes through
//! [`escape_html`] first.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a one-line description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Longest message body the chat platform accepts, in characters.
pub const MAX_BODY_CHARS: usize = 4096;

/// Room kept free by [`clip_body`] for closing tags and the trailing ellipsis.
const CLIP_RESERVE: usize = 48;

const ELLIPSIS: &str = "...";

/// Entities that are already escaped and must be left alone.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:lt|gt|amp|quot|apos|#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6});")
        .expect("invalid regex")
});

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("invalid regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-z]+)[^<>]*>").expect("invalid regex"));

/// Escapes `<`, `>` and bare `&`. Idempotent: `&lt;` stays `&lt;`, never `&amp;lt;`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' if ENTITY.is_match(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaping for a single-quoted attribute value.
fn escape_attr(text: &str) -> String {
    escape_html(text)
        .replace('\'', "&#39;")
        .replace('"', "&quot;")
}

/// `<a href='url'>label</a>` with both parts escaped.
pub fn link(url: &str, label: &str) -> String {
    format!("<a href='{}'>{}</a>", escape_attr(url), escape_html(label))
}

/// Cuts `text` to `max_chars` characters, ending in `...` when anything was dropped.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Shortens an HTML body to at most `max_chars` characters without breaking markup.
///
/// Cuts at the last line break when one is in the second half of the budget, never inside a
/// tag or entity, closes every tag left open and ends with `...` on its own line.
pub fn clip_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let budget = max_chars.saturating_sub(CLIP_RESERVE);
    let end = body
        .char_indices()
        .nth(budget)
        .map_or(body.len(), |(i, _)| i);
    let mut kept = &body[..end];

    if let Some(newline) = kept.rfind('\n') {
        if newline >= kept.len() / 2 {
            kept = &kept[..newline];
        }
    }
    if let Some(open) = kept.rfind('<') {
        if kept[open..].find('>').is_none() {
            kept = &kept[..open];
        }
    }
    if let Some(amp) = kept.rfind('&') {
        if kept[amp..].find(';').is_none() {
            kept = &kept[..amp];
        }
    }

    let mut open_tags: Vec<&str> = Vec::new();
    for caps in TAG.captures_iter(kept) {
        let (Some(slash), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if slash.as_str().is_empty() {
            open_tags.push(name.as_str());
        } else if let Some(pos) = open_tags.iter().rposition(|t| *t == name.as_str()) {
            open_tags.truncate(pos);
        }
    }

    let mut out = kept.trim_end().to_string();
    for name in open_tags.iter().rev() {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
    out.push('\n');
    out.push_str(ELLIPSIS);
    out
}

pub fn strip_brackets(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

/// Replaces every whitespace run (newlines included) with one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unifies line endings to `\n`, strips trailing spaces per line and keeps at most one blank
/// line in a row.
pub fn normalize_newlines(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = unified.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    BLANK_LINES.replace_all(&joined, "\n\n").trim().to_string()
}

/// Plain one-line text for descriptions: no brackets, single spaces, at most
/// [`DESCRIPTION_MAX_CHARS`] characters.
pub fn one_line(text: &str) -> String {
    truncate(
        &collapse_whitespace(&strip_brackets(text)),
        DESCRIPTION_MAX_CHARS,
    )
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
