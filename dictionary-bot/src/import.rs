//! `import-lexicon`: loads synset records from a JSON file into the lexical database.

use std::path::Path;

use anyhow::{Context, Result};
use dbot_core::DbotError;
use dbot_sources::SynsetRecord;
use tracing::info;

use crate::context::open_lexical_store;

/// Parses the JSON array in `file` and imports it into `db_path` in one transaction.
/// Returns the number of synsets written.
pub async fn import_lexicon(file: &Path, db_path: &str) -> Result<usize> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Read lexicon file {}", file.display()))?;
    let records: Vec<SynsetRecord> = serde_json::from_str(&raw)
        .map_err(|e| DbotError::Lexicon(format!("{}: {}", file.display(), e)))?;

    info!(file = %file.display(), records = records.len(), db_path = %db_path, "Importing lexicon");

    let store = open_lexical_store(db_path).await?;
    let count = store
        .import(&records)
        .await
        .map_err(|e| DbotError::Lexicon(e.to_string()))?;

    info!(count = count, db_path = %db_path, "Lexicon import finished");
    Ok(count)
}
