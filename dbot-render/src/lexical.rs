//! Basic and detailed bodies for lexical-database senses.
//!
//! Senses are grouped by part of speech in order of first appearance; numbering restarts in
//! each group.

use std::fmt::Write;

use dbot_core::{LexicalSense, PartOfSpeech};

use crate::sanitize::{capitalize, escape_html};

const BASIC_GROUPS: usize = 3;
const BASIC_SENSES_PER_GROUP: usize = 2;
const BASIC_RELATED_PER_SENSE: usize = 5;
const RELATED_TOTAL: usize = 10;

fn header(word: &str) -> String {
    format!("📚 <b>{}</b> (Lexical)\n", escape_html(&capitalize(word)))
}

fn group_by_pos(senses: &[LexicalSense]) -> Vec<(PartOfSpeech, Vec<&LexicalSense>)> {
    let mut groups: Vec<(PartOfSpeech, Vec<&LexicalSense>)> = Vec::new();
    for sense in senses {
        match groups.iter_mut().find(|(pos, _)| *pos == sense.part_of_speech) {
            Some((_, members)) => members.push(sense),
            None => groups.push((sense.part_of_speech, vec![sense])),
        }
    }
    groups
}

fn join_escaped(words: &[String], limit: usize) -> String {
    words
        .iter()
        .take(limit)
        .map(|w| escape_html(w))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_list(out: &mut String, label: &str, words: &[String]) {
    if !words.is_empty() {
        let _ = writeln!(
            out,
            "   <b>{label}</b>: {}",
            join_escaped(words, RELATED_TOTAL)
        );
    }
}

/// Up to 5 words per shown sense, deduplicated, at most 10 in total.
fn pooled<'a>(
    senses: impl Iterator<Item = &'a LexicalSense>,
    pick: impl Fn(&'a LexicalSense) -> &'a [String],
) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for sense in senses {
        for word in pick(sense).iter().take(BASIC_RELATED_PER_SENSE) {
            if !words.contains(word) {
                words.push(word.clone());
            }
        }
    }
    words.truncate(RELATED_TOTAL);
    words
}

/// At most 3 part-of-speech groups with 2 senses each and the first example of each sense,
/// followed by pooled synonyms and antonyms of the shown senses.
pub fn render_basic(senses: &[LexicalSense], word: &str) -> String {
    let mut out = header(word);
    let groups = group_by_pos(senses);
    let mut shown: Vec<&LexicalSense> = Vec::new();

    for (pos, members) in groups.iter().take(BASIC_GROUPS) {
        let _ = write!(out, "\n<b>{}</b>:\n", pos.label());
        for (i, sense) in members.iter().take(BASIC_SENSES_PER_GROUP).enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, escape_html(&sense.definition));
            if let Some(example) = sense.examples.first() {
                let _ = writeln!(out, "   <i>Example: {}</i>", escape_html(example));
            }
            shown.push(sense);
        }
    }

    let synonyms = pooled(shown.iter().copied(), |s| s.synonyms.as_slice());
    if !synonyms.is_empty() {
        let _ = write!(
            out,
            "\n<b>Synonyms</b>: {}\n",
            join_escaped(&synonyms, RELATED_TOTAL)
        );
    }
    let antonyms = pooled(shown.iter().copied(), |s| s.antonyms.as_slice());
    if !antonyms.is_empty() {
        let _ = write!(
            out,
            "\n<b>Antonyms</b>: {}\n",
            join_escaped(&antonyms, RELATED_TOTAL)
        );
    }
    out
}

/// Every sense with all examples, synonyms and antonyms; nouns also list broader terms,
/// narrower terms and domains.
pub fn render_detailed(senses: &[LexicalSense], word: &str) -> String {
    let mut out = header(word);

    for (pos, members) in group_by_pos(senses) {
        let _ = write!(out, "\n<b>{}</b>:\n", pos.label());
        for (i, sense) in members.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, escape_html(&sense.definition));
            for example in &sense.examples {
                let _ = writeln!(out, "   <i>Example: {}</i>", escape_html(example));
            }
            push_list(&mut out, "Synonyms", &sense.synonyms);
            push_list(&mut out, "Antonyms", &sense.antonyms);
            if pos.is_noun() {
                push_list(&mut out, "Broader terms", &sense.hypernyms);
                push_list(&mut out, "Narrower terms", &sense.hyponyms);
                push_list(&mut out, "Domains", &sense.domains);
            }
        }
    }
    out
}
