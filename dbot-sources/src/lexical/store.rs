//! SQLite-backed lexical database.
//!
//! Schema (created on open if missing):
//!
//! ```sql
//! synsets(id TEXT PRIMARY KEY, pos TEXT, definition TEXT)
//! lemmas(synset_id TEXT, lemma TEXT, lemma_lower TEXT, position INTEGER, sense_number INTEGER)
//! examples(synset_id TEXT, position INTEGER, text TEXT)
//! synset_relations(source_id TEXT, relation TEXT, target_id TEXT, position INTEGER)
//! antonyms(synset_id TEXT, lemma_lower TEXT, antonym TEXT)
//! ```
//!
//! Lemmas are stored WordNet-style with underscores for spaces; `lemma_lower` is the lookup key.

use async_trait::async_trait;
use dbot_core::{LexicalSense, PartOfSpeech};
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::{debug, info, warn};

use super::record::SynsetRecord;
use crate::error::SourceError;
use crate::source::LexicalSource;

const RELATION_HYPERNYM: &str = "hypernym";
const RELATION_HYPONYM: &str = "hyponym";
const RELATION_DOMAIN: &str = "domain";

/// Lookup key for a word: lowercase, whitespace runs joined by `_`.
fn lemma_key(word: &str) -> String {
    word.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn display_lemma(lemma: &str) -> String {
    lemma.replace('_', " ")
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
        list.push(value);
    }
}

/// Read-mostly lexical database on a single SQLite file.
#[derive(Clone)]
pub struct LexicalStore {
    pool: SqlitePool,
}

impl LexicalStore {
    /// Opens (or creates) the database file at `path` and ensures the schema exists.
    pub async fn open(path: &str) -> Result<Self, sqlx::Error> {
        info!(path = %path, "Opening lexical database");

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS synsets (
                id TEXT PRIMARY KEY,
                pos TEXT NOT NULL,
                definition TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lemmas (
                synset_id TEXT NOT NULL,
                lemma TEXT NOT NULL,
                lemma_lower TEXT NOT NULL,
                position INTEGER NOT NULL,
                sense_number INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS examples (
                synset_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                text TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS synset_relations (
                source_id TEXT NOT NULL,
                relation TEXT NOT NULL,
                target_id TEXT NOT NULL,
                position INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS antonyms (
                synset_id TEXT NOT NULL,
                lemma_lower TEXT NOT NULL,
                antonym TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_lemmas_lemma_lower ON lemmas(lemma_lower);
            CREATE INDEX IF NOT EXISTS idx_lemmas_synset_id ON lemmas(synset_id);
            CREATE INDEX IF NOT EXISTS idx_examples_synset_id ON examples(synset_id);
            CREATE INDEX IF NOT EXISTS idx_relations_source ON synset_relations(source_id, relation);
            CREATE INDEX IF NOT EXISTS idx_antonyms_synset ON antonyms(synset_id, lemma_lower);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns all senses of `word`, ordered noun, verb, adjective, satellite, adverb, then by
    /// sense number. `Ok(None)` when the lemma is unknown.
    pub async fn fetch(&self, word: &str) -> Result<Option<Vec<LexicalSense>>, SourceError> {
        let key = lemma_key(word);
        if key.is_empty() {
            return Ok(None);
        }

        let rows: Vec<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT s.id, s.pos, s.definition
            FROM lemmas l JOIN synsets s ON s.id = l.synset_id
            WHERE l.lemma_lower = ?
            ORDER BY CASE s.pos
                WHEN 'n' THEN 0 WHEN 'v' THEN 1 WHEN 'a' THEN 2 WHEN 's' THEN 3 ELSE 4 END,
                l.sense_number, s.id
            "#,
        )
        .bind(&key)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            info!(word = %word, "Word not found in lexical database");
            return Ok(None);
        }

        let mut senses = Vec::with_capacity(rows.len());
        let mut seen_noun = false;
        for (synset_id, pos_code, definition) in rows {
            let Some(part_of_speech) = PartOfSpeech::from_code(&pos_code) else {
                warn!(synset_id = %synset_id, pos = %pos_code, "Skipping synset with unknown part of speech");
                continue;
            };

            let (hypernyms, hyponyms) = if part_of_speech.is_noun() {
                let hypernyms = self.related(&synset_id, RELATION_HYPERNYM).await?;
                let hyponyms = if seen_noun {
                    Vec::new()
                } else {
                    self.related(&synset_id, RELATION_HYPONYM).await?
                };
                seen_noun = true;
                (hypernyms, hyponyms)
            } else {
                (Vec::new(), Vec::new())
            };

            senses.push(LexicalSense {
                part_of_speech,
                definition,
                examples: self.examples(&synset_id).await?,
                synonyms: self.synonyms(&synset_id, &key).await?,
                antonyms: self.antonyms(&synset_id, &key).await?,
                hypernyms,
                hyponyms,
                domains: self.related(&synset_id, RELATION_DOMAIN).await?,
            });
        }

        debug!(word = %word, count = senses.len(), "Lexical senses loaded");
        Ok(if senses.is_empty() { None } else { Some(senses) })
    }

    async fn examples(&self, synset_id: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT text FROM examples WHERE synset_id = ? ORDER BY position")
                .bind(synset_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(text,)| text).collect())
    }

    /// Other lemmas of the synset; the query word itself is excluded case-insensitively.
    async fn synonyms(&self, synset_id: &str, key: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT lemma FROM lemmas WHERE synset_id = ? AND lemma_lower <> ? ORDER BY position",
        )
        .bind(synset_id)
        .bind(key)
        .fetch_all(&self.pool)
        .await?;
        let mut synonyms = Vec::with_capacity(rows.len());
        for (lemma,) in rows {
            push_unique(&mut synonyms, display_lemma(&lemma));
        }
        Ok(synonyms)
    }

    async fn antonyms(&self, synset_id: &str, key: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT antonym FROM antonyms WHERE synset_id = ? AND lemma_lower = ? ORDER BY rowid",
        )
        .bind(synset_id)
        .bind(key)
        .fetch_all(&self.pool)
        .await?;
        let mut antonyms = Vec::with_capacity(rows.len());
        for (antonym,) in rows {
            push_unique(&mut antonyms, display_lemma(&antonym));
        }
        Ok(antonyms)
    }

    /// Related synsets, shown by their first lemma. Targets missing from the database are skipped.
    async fn related(&self, synset_id: &str, relation: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT l.lemma
            FROM synset_relations r
            JOIN lemmas l ON l.synset_id = r.target_id AND l.position = 0
            WHERE r.source_id = ? AND r.relation = ?
            ORDER BY r.position
            "#,
        )
        .bind(synset_id)
        .bind(relation)
        .fetch_all(&self.pool)
        .await?;
        let mut related = Vec::with_capacity(rows.len());
        for (lemma,) in rows {
            push_unique(&mut related, display_lemma(&lemma));
        }
        Ok(related)
    }

    /// Imports synsets in one transaction, replacing any existing rows for the same ids.
    /// Returns the number of synsets written.
    pub async fn import(&self, records: &[SynsetRecord]) -> Result<usize, SourceError> {
        for record in records {
            validate(record)?;
        }

        let mut tx = self.pool.begin().await?;
        for record in records {
            for table in ["lemmas", "examples", "antonyms"] {
                sqlx::query(&format!("DELETE FROM {table} WHERE synset_id = ?"))
                    .bind(&record.id)
                    .execute(&mut *tx)
                    .await?;
            }
            sqlx::query("DELETE FROM synset_relations WHERE source_id = ?")
                .bind(&record.id)
                .execute(&mut *tx)
                .await?;

            sqlx::query("INSERT OR REPLACE INTO synsets (id, pos, definition) VALUES (?, ?, ?)")
                .bind(&record.id)
                .bind(record.pos.trim())
                .bind(&record.definition)
                .execute(&mut *tx)
                .await?;

            for (position, lemma) in record.lemmas.iter().enumerate() {
                let stored = lemma_key(&lemma.name);
                sqlx::query(
                    "INSERT INTO lemmas (synset_id, lemma, lemma_lower, position, sense_number) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&record.id)
                .bind(lemma.name.trim().replace(' ', "_"))
                .bind(&stored)
                .bind(position as i64)
                .bind(lemma.sense_number)
                .execute(&mut *tx)
                .await?;

                for antonym in &lemma.antonyms {
                    sqlx::query(
                        "INSERT INTO antonyms (synset_id, lemma_lower, antonym) VALUES (?, ?, ?)",
                    )
                    .bind(&record.id)
                    .bind(&stored)
                    .bind(antonym)
                    .execute(&mut *tx)
                    .await?;
                }
            }

            for (position, example) in record.examples.iter().enumerate() {
                sqlx::query("INSERT INTO examples (synset_id, position, text) VALUES (?, ?, ?)")
                    .bind(&record.id)
                    .bind(position as i64)
                    .bind(example)
                    .execute(&mut *tx)
                    .await?;
            }

            let relations = [
                (RELATION_HYPERNYM, &record.hypernyms),
                (RELATION_HYPONYM, &record.hyponyms),
                (RELATION_DOMAIN, &record.domains),
            ];
            for (relation, targets) in relations {
                for (position, target) in targets.iter().enumerate() {
                    sqlx::query(
                        "INSERT INTO synset_relations (source_id, relation, target_id, position) VALUES (?, ?, ?, ?)",
                    )
                    .bind(&record.id)
                    .bind(relation)
                    .bind(target)
                    .bind(position as i64)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }
        tx.commit().await?;

        info!(count = records.len(), "Imported synsets into lexical database");
        Ok(records.len())
    }
}

fn validate(record: &SynsetRecord) -> Result<(), SourceError> {
    if record.id.trim().is_empty() {
        return Err(SourceError::InvalidRecord("synset id is empty".to_string()));
    }
    if PartOfSpeech::from_code(&record.pos).is_none() {
        return Err(SourceError::InvalidRecord(format!(
            "{}: unknown part of speech '{}'",
            record.id, record.pos
        )));
    }
    if record.lemmas.iter().all(|l| l.name.trim().is_empty()) {
        return Err(SourceError::InvalidRecord(format!("{}: no lemmas", record.id)));
    }
    Ok(())
}

#[async_trait]
impl LexicalSource for LexicalStore {
    async fn lookup(&self, word: &str) -> Option<Vec<LexicalSense>> {
        match self.fetch(word).await {
            Ok(senses) => senses,
            Err(e) => {
                warn!(word = %word, error = %e, "Lexical lookup failed");
                None
            }
        }
    }
}
