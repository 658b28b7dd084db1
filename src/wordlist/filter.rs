//! Normalizes, validates and deduplicates raw lines.

use std::collections::HashSet;

use crate::config::Config;
use crate::progress::Progress;

/// Acceptance rules for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    min_len: usize,
    max_len: usize,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl WordFilter {
    /// Accept words of `min_len..=max_len` letters
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Filter bounds taken from the configuration
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.min_len, config.max_len)
    }

    /// Trim and lowercase `raw`, returning it if it is an acceptable word.
    ///
    /// Only ASCII letters are accepted, so byte length equals letter count.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let word = raw.trim();
        let len = word.len();
        if len < self.min_len || len > self.max_len {
            return None;
        }
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(word.to_ascii_lowercase())
    }
}

/// Unique accepted words in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CleanWordSet {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl CleanWordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-normalized word. Returns `false` if it was a duplicate.
    pub fn insert(&mut self, word: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Number of unique words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been accepted
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in the order they were first seen
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Consume the set, returning the words in ascending lexicographic order
    pub fn into_sorted(self) -> Vec<String> {
        let mut words = self.words;
        // Entries are unique, so stability is irrelevant.
        words.sort_unstable();
        words
    }
}

/// Run every raw line through `filter`, keeping the first occurrence of each word.
pub fn clean_words<S: AsRef<str>>(
    raw: &[S],
    filter: &WordFilter,
    progress: &Progress,
) -> CleanWordSet {
    let mut clean = CleanWordSet::new();
    for (i, line) in raw.iter().enumerate() {
        progress.tick(i);
        if let Some(word) = filter.normalize(line.as_ref()) {
            clean.insert(word);
        }
    }
    progress.finish();

    tracing::info!("Accepted {} of {} lines", clean.len(), raw.len());
    clean
}
