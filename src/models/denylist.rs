//! Content filter denylist

use std::collections::HashSet;

/// Immutable set of lowercase substrings that get a message removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    words: Vec<String>,
}

impl Denylist {
    /// Build a denylist, lowercasing entries and dropping blank or repeated ones
    ///
    /// An empty list is valid and never matches, which turns the filter off.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        Self { words }
    }

    /// First entry contained anywhere in `text`, ignoring case.
    ///
    /// Plain substring search: "badword1" also matches inside a longer word.
    pub fn find_match(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.words
            .iter()
            .find(|word| lowered.contains(word.as_str()))
            .map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
