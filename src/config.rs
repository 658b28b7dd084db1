//! Application configuration.
//!
//! Defaults reproduce the fixed behavior of the converter. Environment
//! variables (optionally from a .env file) may override them.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{files, filter, format, progress};
use crate::error::{Error, Result};

/// Every variable [`Config::from_lookup`] consults.
pub const ENV_VARS: &[&str] = &[
    "WORDLIST_INPUT",
    "WORDLIST_OUTPUT",
    "WORDLIST_DECLARATION",
    "WORDLIST_MIN_LEN",
    "WORDLIST_MAX_LEN",
    "WORDLIST_WORDS_PER_LINE",
    "WORDLIST_PROGRESS_INTERVAL",
    "WORDLIST_QUIET",
];

/// Configuration for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Newline-delimited word list to read
    pub input_path: PathBuf,
    /// Where the array-literal declaration is written
    pub output_path: PathBuf,
    /// Identifier the array is assigned to, e.g. `window.wordList`
    pub declaration: String,
    /// Shortest accepted word
    pub min_len: usize,
    /// Longest accepted word
    pub max_len: usize,
    /// Words per output row
    pub words_per_line: usize,
    /// Progress is reported every this many items
    pub progress_interval: usize,
    /// Print progress messages to stdout
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(files::DEFAULT_INPUT),
            output_path: PathBuf::from(files::DEFAULT_OUTPUT),
            declaration: format::DEFAULT_DECLARATION.to_string(),
            min_len: filter::MIN_WORD_LEN,
            max_len: filter::MAX_WORD_LEN,
            words_per_line: format::WORDS_PER_LINE,
            progress_interval: progress::DEFAULT_INTERVAL,
            show_progress: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Overrides are opt-in: with no `WORDLIST_*` variable set (in the
    /// environment or a `.env` file) this returns [`Config::default`], i.e. the
    /// fixed `words.txt` -> `word_list_js.txt` conversion. A `.env` that does set
    /// them can redirect either path, and a malformed value fails the run with
    /// [`Error::Config`] before anything is read.
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("WORDLIST_INPUT") {
            config.input_path = expand_path(&path);
        }
        if let Some(path) = lookup("WORDLIST_OUTPUT") {
            config.output_path = expand_path(&path);
        }
        if let Some(declaration) = lookup("WORDLIST_DECLARATION") {
            config.declaration = declaration.trim().to_string();
        }

        if let Some(value) = lookup("WORDLIST_MIN_LEN") {
            config.min_len = parse_number("WORDLIST_MIN_LEN", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_MAX_LEN") {
            config.max_len = parse_number("WORDLIST_MAX_LEN", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_WORDS_PER_LINE") {
            config.words_per_line = parse_number("WORDLIST_WORDS_PER_LINE", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_PROGRESS_INTERVAL") {
            config.progress_interval = parse_number("WORDLIST_PROGRESS_INTERVAL", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_QUIET") {
            config.show_progress = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a usable conversion
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(Error::config(
                "min_len must be at least 1",
                "Set WORDLIST_MIN_LEN to a positive number",
            ));
        }
        if self.min_len > self.max_len {
            return Err(Error::config(
                format!("min_len ({}) exceeds max_len ({})", self.min_len, self.max_len),
                "Check WORDLIST_MIN_LEN and WORDLIST_MAX_LEN",
            ));
        }
        if self.words_per_line == 0 {
            return Err(Error::config(
                "words_per_line must be at least 1",
                "Set WORDLIST_WORDS_PER_LINE to a positive number",
            ));
        }
        if self.progress_interval == 0 {
            return Err(Error::config(
                "progress_interval must be at least 1",
                "Set WORDLIST_PROGRESS_INTERVAL to a positive number",
            ));
        }
        if !is_identifier_path(&self.declaration) {
            return Err(Error::config(
                format!("{:?} is not a valid declaration target", self.declaration),
                "Use a JavaScript identifier such as window.wordList",
            ));
        }
        Ok(())
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).to_string())
}

fn parse_number(key: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        Error::config(
            format!("{key} must be a non-negative integer, got {value:?}"),
            "Fix or remove the variable in your environment or .env file",
        )
    })
}

/// `foo`, `window.wordList`, `$app._words` are accepted.
fn is_identifier_path(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
