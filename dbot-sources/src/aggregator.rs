//! Aggregator: runs the sources for one query and merges them into a [`LookupResult`].
//!
//! Order is a strict fallback chain, dictionary > lexical > slang-only > not found. Slang is
//! looked up alongside the dictionary and attached to whichever primary result wins.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dbot_core::LookupResult;
use tracing::{info, instrument, warn};

use crate::source::{DictionarySource, LexicalSource, SlangSource};

/// Outcome of [`Aggregator::aggregate`]. `NoQuery` is distinct from a not-found result so the
/// caller can show a prompt instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateOutcome {
    NoQuery,
    Completed(LookupResult),
}

/// Normalizes raw inline query text: trimmed, lowercased, whitespace runs collapsed.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Chains the three sources. Holds no per-query state; share it behind an `Arc`.
#[derive(Clone)]
pub struct Aggregator {
    dictionary: Arc<dyn DictionarySource>,
    lexical: Arc<dyn LexicalSource>,
    slang: Arc<dyn SlangSource>,
    timeout: Duration,
}

impl Aggregator {
    /// `timeout` bounds each source call; a call that exceeds it counts as not found.
    pub fn new(
        dictionary: Arc<dyn DictionarySource>,
        lexical: Arc<dyn LexicalSource>,
        slang: Arc<dyn SlangSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            dictionary,
            lexical,
            slang,
            timeout,
        }
    }

    /// Looks up `raw` (normalized first). Empty input returns [`AggregateOutcome::NoQuery`]
    /// without touching any source.
    #[instrument(skip(self))]
    pub async fn aggregate(&self, raw: &str) -> AggregateOutcome {
        let word = normalize_query(raw);
        if word.is_empty() {
            return AggregateOutcome::NoQuery;
        }

        let (entry, slang) = tokio::join!(
            bounded("dictionary", self.timeout, self.dictionary.lookup(&word)),
            bounded("slang", self.timeout, self.slang.lookup(&word)),
        );
        let slang = slang.unwrap_or_default();

        let result = if let Some(entry) = entry {
            LookupResult::Dictionary { entry, slang }
        } else if let Some(senses) =
            bounded("lexical", self.timeout, self.lexical.lookup(&word)).await
        {
            LookupResult::Lexical { senses, slang }
        } else if !slang.is_empty() {
            LookupResult::SlangOnly { slang }
        } else {
            LookupResult::NotFound
        };

        info!(
            word = %word,
            source = result.kind().as_str(),
            slang_count = result.slang().len(),
            "Aggregation finished"
        );
        AggregateOutcome::Completed(result)
    }
}

/// Awaits one source call with an upper bound. Empty collections are treated like `None` by the
/// sources themselves, so only the timeout is handled here.
async fn bounded<T, F>(source: &'static str, timeout: Duration, lookup: F) -> Option<T>
where
    F: Future<Output = Option<T>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(result) => result,
        Err(_) => {
            warn!(source = source, timeout_ms = timeout.as_millis() as u64, "Source lookup timed out");
            None
        }
    }
}
