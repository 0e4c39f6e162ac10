//! Dataset loading for the glossary. Every function in this module deals with
//! one concern: getting the raw JSON records on disk into the normalized
//! `Entry` shape the rest of the codebase works with. The raw shape is
//! tolerant (a `pos` field may be a single string, a list, or absent, and
//! `category` may be missing or empty) and all of that tolerance is resolved
//! here, exactly once, so downstream code never type-branches on it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Entry;

/// Location of the glossary dataset relative to the working directory. The
/// same file is embedded into the binary at compile time so a fresh checkout
/// or an empty working directory can seed itself on first launch.
const DATA_PATH: &str = "data/glossary.json";

/// Compile-time copy of the seed dataset, written to `DATA_PATH` when no
/// dataset exists yet.
const SEED_JSON: &str = include_str!("../data/glossary.json");

/// Errors surfaced by the data layer. Missing optional fields inside an entry
/// are not errors; only failures to obtain or parse the dataset itself are.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read glossary dataset at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write seed glossary dataset to {path}")]
    Seed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse glossary dataset")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of the `pos` field: either one tag or a list of tags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPos {
    One(String),
    Many(Vec<String>),
}

/// On-disk shape of a single record. `id`, `word`, and `definition` are
/// required by the dataset contract; the optional fields degrade to "no
/// value" rather than failing the parse.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: u64,
    word: String,
    definition: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    pos: Option<RawPos>,
}

impl RawEntry {
    fn into_entry(self) -> Entry {
        Entry {
            id: self.id,
            word: self.word,
            definition: self.definition,
            category: self.category.filter(|value| !value.is_empty()),
            parts_of_speech: normalize_pos(self.pos),
        }
    }
}

/// Flatten the string-or-list `pos` shape into an ordered list of tags,
/// dropping empty strings along the way.
fn normalize_pos(pos: Option<RawPos>) -> Vec<String> {
    let values = match pos {
        None => Vec::new(),
        Some(RawPos::One(value)) => vec![value],
        Some(RawPos::Many(values)) => values,
    };
    values
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect()
}

/// Parse a JSON array of raw records into normalized entries, preserving the
/// dataset's order.
pub fn entries_from_json(json: &str) -> Result<Vec<Entry>, DataError> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawEntry::into_entry).collect())
}

/// Load the dataset from `data/glossary.json`, materializing the embedded
/// seed there first if the file does not exist. Mirrors the usual
/// load-or-seed startup so the first launch in a fresh directory works
/// without any setup.
pub fn load_or_seed_entries() -> Result<Vec<Entry>, DataError> {
    let path = Path::new(DATA_PATH);
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| DataError::Seed {
                path: DATA_PATH.to_string(),
                source,
            })?;
        }
        fs::write(path, SEED_JSON).map_err(|source| DataError::Seed {
            path: DATA_PATH.to_string(),
            source,
        })?;
    }

    let json = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: DATA_PATH.to_string(),
        source,
    })?;
    entries_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pos_string_becomes_one_tag() {
        let entries = entries_from_json(
            r#"[{"id": 1, "word": "cat", "definition": "a feline", "category": "noun", "pos": "n"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].parts_of_speech, vec!["n".to_string()]);
        assert_eq!(entries[0].category.as_deref(), Some("noun"));
    }

    #[test]
    fn pos_list_keeps_order() {
        let entries = entries_from_json(
            r#"[{"id": 2, "word": "dog", "definition": "a canine", "pos": ["n", "v"]}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].parts_of_speech, vec!["n", "v"]);
    }

    #[test]
    fn missing_optional_fields_degrade_to_no_value() {
        let entries =
            entries_from_json(r#"[{"id": 3, "word": "alas", "definition": "a cry"}]"#).unwrap();
        assert_eq!(entries[0].category, None);
        assert!(entries[0].parts_of_speech.is_empty());
    }

    #[test]
    fn empty_strings_are_dropped_during_normalization() {
        let entries = entries_from_json(
            r#"[{"id": 4, "word": "ebb", "definition": "to recede", "category": "", "pos": ["", "v"]}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].category, None);
        assert_eq!(entries[0].parts_of_speech, vec!["v"]);
    }

    #[test]
    fn seed_dataset_parses_and_has_unique_ids() {
        let entries = entries_from_json(SEED_JSON).unwrap();
        assert!(!entries.is_empty());
        let mut ids: Vec<u64> = entries.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }
}
