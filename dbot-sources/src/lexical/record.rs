//! Import format for the lexical database: one JSON object per synset.
//!
//! ```json
//! {"id": "dog.n.01", "pos": "n", "definition": "a domesticated canid",
//!  "examples": ["the dog barked all night"],
//!  "lemmas": [{"name": "dog", "sense_number": 1}, {"name": "domestic_dog"}],
//!  "hypernyms": ["canine.n.02"], "hyponyms": ["puppy.n.01"], "domains": []}
//! ```
//!
//! Relations name target synset ids; antonyms are lemma-level words.

use serde::{Deserialize, Serialize};

fn first_sense() -> i64 {
    1
}

/// One lemma of a synset. `sense_number` orders this synset among the lemma's senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub name: String,
    #[serde(default = "first_sense")]
    pub sense_number: i64,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// One synset with its lemmas, examples and relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    /// WordNet part-of-speech code: `n`, `v`, `a`, `s` or `r`.
    pub pos: String,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub lemmas: Vec<LemmaRecord>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default)]
    pub hyponyms: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
}
