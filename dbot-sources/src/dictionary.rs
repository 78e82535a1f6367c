//! REST dictionary client (Free Dictionary API schema).
//!
//! `GET <base>/<word>` returns a JSON array of entries; only the first entry is used.
//! 404 means the word is unknown; any other non-200 status or an unexpected body is an error.

use std::time::Duration;

use async_trait::async_trait;
use dbot_core::{Definition, DictionaryEntry, Meaning};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::source::DictionarySource;

/// Default endpoint of the Free Dictionary API (English).
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Client for the REST dictionary source.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

impl DictionaryClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Builds `<base>/<word>` with the word percent-encoded as one path segment.
    fn word_url(&self, word: &str) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Performs the request. `Ok(None)` when the word is unknown or has no usable definition.
    pub async fn fetch(&self, word: &str) -> Result<Option<DictionaryEntry>, SourceError> {
        let url = self.word_url(word)?;
        debug!(word = %word, url = %url, "Dictionary request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::from_request(e, self.timeout))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!(word = %word, "Word not found in dictionary");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::from_request(e, self.timeout))?;
        let entries: Vec<ApiEntry> = serde_json::from_str(&body)
            .map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

        Ok(entries
            .into_iter()
            .next()
            .and_then(|entry| convert_entry(entry, word)))
    }
}

#[async_trait]
impl DictionarySource for DictionaryClient {
    async fn lookup(&self, word: &str) -> Option<DictionaryEntry> {
        match self.fetch(word).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(word = %word, error = %e, "Dictionary lookup failed");
                None
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn push_unique(list: &mut Vec<String>, value: String) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Maps the API entry into the core model. Meanings without a part of speech or without any
/// definition text are dropped; an entry left with no meanings counts as not found.
fn convert_entry(entry: ApiEntry, query: &str) -> Option<DictionaryEntry> {
    let phonetic = non_empty(entry.phonetic).or_else(|| {
        entry
            .phonetics
            .iter()
            .find_map(|p| non_empty(p.text.clone()))
    });
    let audio_url = entry
        .phonetics
        .iter()
        .find_map(|p| non_empty(p.audio.clone()));

    let meanings: Vec<Meaning> = entry
        .meanings
        .into_iter()
        .filter_map(|m| {
            let part_of_speech = non_empty(m.part_of_speech)?;
            let mut synonyms = Vec::new();
            let mut antonyms = Vec::new();
            for s in m.synonyms {
                push_unique(&mut synonyms, s);
            }
            for a in m.antonyms {
                push_unique(&mut antonyms, a);
            }
            let mut definitions = Vec::new();
            for d in m.definitions {
                for s in d.synonyms {
                    push_unique(&mut synonyms, s);
                }
                for a in d.antonyms {
                    push_unique(&mut antonyms, a);
                }
                if let Some(text) = non_empty(d.definition) {
                    definitions.push(Definition {
                        text,
                        example: non_empty(d.example),
                    });
                }
            }
            if definitions.is_empty() {
                return None;
            }
            Some(Meaning {
                part_of_speech,
                definitions,
                synonyms,
                antonyms,
            })
        })
        .collect();

    if meanings.is_empty() {
        return None;
    }

    Some(DictionaryEntry {
        word: non_empty(entry.word).unwrap_or_else(|| query.to_string()),
        phonetic,
        audio_url,
        etymology: non_empty(entry.origin),
        meanings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_url_encodes_segment() {
        let client =
            DictionaryClient::new("https://example.com/api/v2/entries/en/", Duration::from_secs(1))
                .unwrap();
        let url = client.word_url("ice cream").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/v2/entries/en/ice%20cream"
        );
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(DictionaryClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_convert_merges_definition_synonyms_and_skips_empty_meanings() {
        let raw = r#"[{
            "word": "bright",
            "phonetics": [{"text": "", "audio": ""}, {"text": "/braɪt/", "audio": "https://a/b.mp3"}],
            "meanings": [
                {"partOfSpeech": "adjective",
                 "definitions": [{"definition": "Visually dazzling.", "synonyms": ["shiny", "vivid"]}],
                 "synonyms": ["vivid", "brilliant"], "antonyms": ["dull"]},
                {"partOfSpeech": "noun", "definitions": []}
            ]
        }]"#;
        let entries: Vec<ApiEntry> = serde_json::from_str(raw).unwrap();
        let entry = convert_entry(entries.into_iter().next().unwrap(), "bright").unwrap();

        assert_eq!(entry.phonetic.as_deref(), Some("/braɪt/"));
        assert_eq!(entry.audio_url.as_deref(), Some("https://a/b.mp3"));
        assert_eq!(entry.meanings.len(), 1);
        assert_eq!(entry.meanings[0].synonyms, vec!["vivid", "brilliant", "shiny"]);
        assert_eq!(entry.meanings[0].antonyms, vec!["dull"]);
        assert!(entry.etymology.is_none());
    }
}
