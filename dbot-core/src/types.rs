//! Core types: per-source lookup entries, the aggregated [`LookupResult`], and the rendered inline result.

use serde::{Deserialize, Serialize};

/// Part of speech of a lexical-database sense (WordNet codes `n`, `v`, `a`, `s`, `r`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Parses a single-letter WordNet code. Returns None for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" => Some(Self::Adjective),
            "s" => Some(Self::AdjectiveSatellite),
            "r" => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Human-readable label used as a section heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::AdjectiveSatellite => "adjective (satellite)",
            Self::Adverb => "adverb",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, Self::Noun)
    }
}

/// One definition inside a dictionary meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,
    pub example: Option<String>,
}

/// A dictionary meaning: one part of speech with its definitions and related words.
/// `synonyms` and `antonyms` are deduplicated and keep the source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Normalized entry from the REST dictionary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub etymology: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// One sense from the local lexical database.
///
/// `hypernyms`, `hyponyms` are only filled for nouns; `hyponyms` only for the first noun sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalSense {
    pub part_of_speech: PartOfSpeech,
    pub definition: String,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub hypernyms: Vec<String>,
    pub hyponyms: Vec<String>,
    pub domains: Vec<String>,
}

/// One community definition from the slang source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlangEntry {
    pub word: String,
    pub definition: String,
    pub example: Option<String>,
    pub thumbs_up: i64,
    pub thumbs_down: i64,
    pub author: String,
    pub permalink: Option<String>,
}

/// Tag of a [`LookupResult`], used for logging and result ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Dictionary,
    Lexical,
    SlangOnly,
    NotFound,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Lexical => "lexical",
            Self::SlangOnly => "slang_only",
            Self::NotFound => "not_found",
        }
    }
}

/// Aggregated result of one query.
///
/// Exactly one primary tag; slang entries ride along with every tag except `NotFound`.
/// `SlangOnly` is only built with a non-empty `slang` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Dictionary {
        entry: DictionaryEntry,
        slang: Vec<SlangEntry>,
    },
    Lexical {
        senses: Vec<LexicalSense>,
        slang: Vec<SlangEntry>,
    },
    SlangOnly {
        slang: Vec<SlangEntry>,
    },
    NotFound,
}

impl LookupResult {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Dictionary { .. } => SourceKind::Dictionary,
            Self::Lexical { .. } => SourceKind::Lexical,
            Self::SlangOnly { .. } => SourceKind::SlangOnly,
            Self::NotFound => SourceKind::NotFound,
        }
    }

    /// Slang entries attached to this result, in source order. Empty for `NotFound`.
    pub fn slang(&self) -> &[SlangEntry] {
        match self {
            Self::Dictionary { slang, .. }
            | Self::Lexical { slang, .. }
            | Self::SlangOnly { slang } => slang,
            Self::NotFound => &[],
        }
    }
}

/// One inline result ready for the chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResult {
    pub id: String,
    pub title: String,
    /// Plain one-line text, at most 100 characters.
    pub description: String,
    /// HTML-subset markup sent when the user picks the result.
    pub body: String,
    pub thumbnail_url: String,
    /// Whether the client may expand a link preview for the body.
    pub link_preview: bool,
}

/// Answer to one inline query: the ordered results plus cache time.
/// `start_prompt` is set for the empty-query answer (button text that opens a private chat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAnswer {
    pub results: Vec<RenderedResult>,
    pub cache_time_secs: u32,
    pub start_prompt: Option<String>,
}
