//! Owned key/value catalogs driven by pure command handlers.
//!
//! A [`Catalog`] is moved into [`apply`] together with a [`Command`] and
//! comes back, possibly updated, alongside an [`Outcome`] describing what
//! happened. Nothing is shared or global; the session owns the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use regex_validator::text::title_case;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

/// Keys are matched case-insensitively.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub fn normalize_value(value: &str) -> String {
    title_case(value.trim())
}

impl Catalog {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (normalize_key(k.as_ref()), normalize_value(v.as_ref())))
            .collect();
        Self { entries }
    }

    /// Authors and the book each one is reading.
    pub fn reading_list() -> Self {
        Self::from_pairs([
            ("alice smith", "Python Primer"),
            ("bill bower", "Clojure Code"),
            ("hassan hassan", "Deep Learning Dive"),
            ("carol smith", "Dora The Explorer"),
        ])
    }

    /// Usernames and the full name behind each account.
    pub fn accounts() -> Self {
        Self::from_pairs([
            ("hhassan", "Hassan Hadi"),
            ("jdoe", "Jane Doe"),
            ("jsmith", "John Smith"),
            ("sstudent", "Sally Strudel"),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize_key(key)).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(String),
    Add { key: String, value: String },
    Edit { key: String, value: String },
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found { key: String, value: String },
    Added { key: String, value: String },
    AlreadyExists { key: String, value: String },
    Updated { key: String, value: String },
    Deleted { key: String, value: String },
    NotFound(String),
}

pub fn apply(mut catalog: Catalog, command: Command) -> (Catalog, Outcome) {
    let outcome = match command {
        Command::View(key) => {
            let key = normalize_key(&key);
            match catalog.entries.get(&key) {
                Some(value) => Outcome::Found { value: value.clone(), key },
                None => Outcome::NotFound(key),
            }
        }
        Command::Add { key, value } => {
            let key = normalize_key(&key);
            match catalog.entries.get(&key) {
                Some(existing) => Outcome::AlreadyExists { value: existing.clone(), key },
                None => {
                    let value = normalize_value(&value);
                    catalog.entries.insert(key.clone(), value.clone());
                    Outcome::Added { key, value }
                }
            }
        }
        Command::Edit { key, value } => {
            let key = normalize_key(&key);
            match catalog.entries.get_mut(&key) {
                Some(slot) => {
                    *slot = normalize_value(&value);
                    Outcome::Updated { value: slot.clone(), key }
                }
                None => Outcome::NotFound(key),
            }
        }
        Command::Delete(key) => {
            let key = normalize_key(&key);
            match catalog.entries.remove(&key) {
                Some(value) => Outcome::Deleted { key, value },
                None => Outcome::NotFound(key),
            }
        }
    };

    (catalog, outcome)
}
