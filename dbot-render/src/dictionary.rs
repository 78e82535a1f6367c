//! Basic and detailed bodies for a REST dictionary entry.

use std::fmt::Write;

use dbot_core::{DictionaryEntry, Meaning};

use crate::sanitize::{capitalize, escape_html, link};

const BASIC_MEANINGS: usize = 3;
const BASIC_DEFINITIONS: usize = 2;
const BASIC_RELATED_PER_MEANING: usize = 5;
const RELATED_TOTAL: usize = 10;

/// `📚 <b>Word</b> – <i>phonetic</i>` followed by a newline.
fn header(entry: &DictionaryEntry, word: &str) -> String {
    let mut out = format!("📚 <b>{}</b>", escape_html(&capitalize(word)));
    if let Some(phonetic) = &entry.phonetic {
        let _ = write!(out, " – <i>{}</i>", escape_html(phonetic));
    }
    out.push('\n');
    out
}

fn push_meaning(out: &mut String, meaning: &Meaning, max_definitions: usize) {
    let _ = write!(out, "\n<b>{}</b>:\n", escape_html(&meaning.part_of_speech));
    for (i, definition) in meaning.definitions.iter().take(max_definitions).enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, escape_html(&definition.text));
        if let Some(example) = &definition.example {
            let _ = writeln!(out, "   <i>Example: {}</i>", escape_html(example));
        }
    }
}

/// Up to `per_meaning` words from each meaning, deduplicated, at most [`RELATED_TOTAL`].
fn collect_related<'a>(
    meanings: &'a [Meaning],
    per_meaning: usize,
    pick: impl Fn(&'a Meaning) -> &'a [String],
) -> Vec<&'a str> {
    let mut words: Vec<&str> = Vec::new();
    for meaning in meanings {
        for word in pick(meaning).iter().take(per_meaning) {
            if !words.contains(&word.as_str()) {
                words.push(word.as_str());
            }
        }
    }
    words.truncate(RELATED_TOTAL);
    words
}

fn join_escaped<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| escape_html(w.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_audio(out: &mut String, entry: &DictionaryEntry) {
    if let Some(url) = &entry.audio_url {
        let _ = write!(out, "\n🔊 {}", link(url, "Listen to pronunciation"));
    }
}

/// At most 3 meanings with 2 definitions each, then pooled synonyms and antonyms and the
/// audio link.
pub fn render_basic(entry: &DictionaryEntry, word: &str) -> String {
    let mut out = header(entry, word);

    for meaning in entry.meanings.iter().take(BASIC_MEANINGS) {
        push_meaning(&mut out, meaning, BASIC_DEFINITIONS);
    }

    let synonyms = collect_related(&entry.meanings, BASIC_RELATED_PER_MEANING, |m| {
        m.synonyms.as_slice()
    });
    if !synonyms.is_empty() {
        let _ = write!(out, "\n<b>Synonyms</b>: {}\n", join_escaped(&synonyms));
    }
    let antonyms = collect_related(&entry.meanings, BASIC_RELATED_PER_MEANING, |m| {
        m.antonyms.as_slice()
    });
    if !antonyms.is_empty() {
        let _ = write!(out, "\n<b>Antonyms</b>: {}\n", join_escaped(&antonyms));
    }

    push_audio(&mut out, entry);
    out
}

/// Every meaning and definition, etymology, and per-meaning synonyms/antonyms (at most 10 each).
pub fn render_detailed(entry: &DictionaryEntry, word: &str) -> String {
    let mut out = header(entry, word);

    if let Some(etymology) = &entry.etymology {
        let _ = write!(out, "\n<b>Etymology</b>: {}\n", escape_html(etymology));
    }

    for meaning in &entry.meanings {
        push_meaning(&mut out, meaning, usize::MAX);
        if !meaning.synonyms.is_empty() {
            let shown = &meaning.synonyms[..meaning.synonyms.len().min(RELATED_TOTAL)];
            let _ = writeln!(out, "   <b>Synonyms</b>: {}", join_escaped(shown));
        }
        if !meaning.antonyms.is_empty() {
            let shown = &meaning.antonyms[..meaning.antonyms.len().min(RELATED_TOTAL)];
            let _ = writeln!(out, "   <b>Antonyms</b>: {}", join_escaped(shown));
        }
    }

    push_audio(&mut out, entry);
    out
}
