// src/core/special_words.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied exception spellings, keyed by lowercase word.
/// e.g. "nepal" -> "Nepaal" to force a spelling the ending rules would miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialWords {
    entries: BTreeMap<String, String>,
}

impl SpecialWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry. Returns the previous spelling, if any.
    pub fn insert(&mut self, word: &str, spelling: &str) -> Option<String> {
        self.entries.insert(word.to_lowercase(), spelling.to_string())
    }

    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(&word.to_lowercase())
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Finds the longest suffix of `word` (at least two chars) with an entry.
    /// Returns the byte offset where that suffix starts and its spelling.
    pub fn matching_suffix(&self, word: &str) -> Option<(usize, &str)> {
        if self.entries.is_empty() {
            return None;
        }
        let starts: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let last_start = starts.len().checked_sub(2)?;
        starts[..=last_start].iter().find_map(|&start| {
            self.get(&word[start..]).map(|spelling| (start, spelling))
        })
    }
}

impl FromIterator<(String, String)> for SpecialWords {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut words = SpecialWords::new();
        for (word, spelling) in iter {
            words.insert(&word, &spelling);
        }
        words
    }
}
