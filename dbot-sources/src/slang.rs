//! Slang dictionary client (Urban Dictionary `define` schema).
//!
//! `GET <base>?term=<word>` returns `{"list": [...]}`. An empty list means not found.

use std::time::Duration;

use async_trait::async_trait;
use dbot_core::SlangEntry;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::source::SlangSource;

/// Default slang API endpoint.
pub const DEFAULT_SLANG_API_URL: &str = "https://api.urbandictionary.com/v0/define";

/// Client for the slang source.
#[derive(Debug, Clone)]
pub struct SlangClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    list: Vec<ApiSlangEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiSlangEntry {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    thumbs_up: Option<i64>,
    #[serde(default)]
    thumbs_down: Option<i64>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    permalink: Option<String>,
}

impl SlangClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Performs the request. `Ok(None)` when the list is empty.
    pub async fn fetch(&self, word: &str) -> Result<Option<Vec<SlangEntry>>, SourceError> {
        debug!(word = %word, url = %self.base_url, "Slang request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("term", word)])
            .send()
            .await
            .map_err(|e| SourceError::from_request(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::from_request(e, self.timeout))?;
        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| SourceError::MalformedResponse(e.to_string()))?;

        let entries: Vec<SlangEntry> = parsed
            .list
            .into_iter()
            .filter_map(|e| convert_entry(e, word))
            .collect();

        if entries.is_empty() {
            info!(word = %word, "No slang entries");
            return Ok(None);
        }
        debug!(word = %word, count = entries.len(), "Slang entries received");
        Ok(Some(entries))
    }
}

#[async_trait]
impl SlangSource for SlangClient {
    async fn lookup(&self, word: &str) -> Option<Vec<SlangEntry>> {
        match self.fetch(word).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(word = %word, error = %e, "Slang lookup failed");
                None
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Entries without definition text are dropped; a missing headword falls back to the query.
fn convert_entry(entry: ApiSlangEntry, query: &str) -> Option<SlangEntry> {
    let definition = non_empty(entry.definition)?;
    Some(SlangEntry {
        word: non_empty(entry.word)
            .map(|w| w.trim().to_string())
            .unwrap_or_else(|| query.to_string()),
        definition,
        example: non_empty(entry.example),
        thumbs_up: entry.thumbs_up.unwrap_or(0),
        thumbs_down: entry.thumbs_down.unwrap_or(0),
        author: non_empty(entry.author)
            .map(|a| a.trim().to_string())
            .unwrap_or_else(|| "anonymous".to_string()),
        permalink: non_empty(entry.permalink),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_entry_defaults() {
        let raw = r#"{"definition": "a [thing]", "example": "  "}"#;
        let api: ApiSlangEntry = serde_json::from_str(raw).unwrap();
        let entry = convert_entry(api, "yeet").unwrap();
        assert_eq!(entry.word, "yeet");
        assert_eq!(entry.author, "anonymous");
        assert!(entry.example.is_none());
        assert_eq!(entry.thumbs_up, 0);
    }

    #[test]
    fn test_convert_entry_without_definition_is_dropped() {
        let raw = r#"{"word": "yeet", "definition": ""}"#;
        let api: ApiSlangEntry = serde_json::from_str(raw).unwrap();
        assert!(convert_entry(api, "yeet").is_none());
    }
}
