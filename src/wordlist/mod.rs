//! Word list conversion pipeline.
//!
//! Load -> filter -> sort -> format -> write. Each stage runs to completion
//! before the next starts and nothing is written unless every stage succeeds.

pub mod filter;
pub mod format;
pub mod loader;
pub mod writer;

use std::path::PathBuf;

use crate::config::Config;
use crate::constants::progress::SAMPLE_SIZE;
use crate::error::Result;
use crate::progress::Progress;

pub use filter::{clean_words, CleanWordSet, WordFilter};
pub use format::ArrayLiteral;
pub use loader::load_lines;
pub use writer::write_output;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Lines read from the input
    pub raw_count: usize,
    /// Sorted unique words that were written
    pub words: Vec<String>,
    /// Length of the rendered declaration in characters
    pub output_chars: usize,
    /// File the declaration was written to
    pub output_path: PathBuf,
}

impl ConversionSummary {
    /// Number of words written
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The first `SAMPLE_SIZE` words
    pub fn head(&self) -> &[String] {
        &self.words[..self.words.len().min(SAMPLE_SIZE)]
    }

    /// The last `SAMPLE_SIZE` words
    pub fn tail(&self) -> &[String] {
        &self.words[self.words.len().saturating_sub(SAMPLE_SIZE)..]
    }

    /// Print the closing report to stdout
    pub fn print(&self) {
        println!("Successfully converted {} words to JavaScript format", self.word_count());
        println!("Output saved to {}", self.output_path.display());
        println!("First {SAMPLE_SIZE} words: {:?}", self.head());
        println!("Last {SAMPLE_SIZE} words: {:?}", self.tail());
        println!("File size: {} characters", self.output_chars);
    }
}

/// Render the sorted words without touching the filesystem
pub fn render_words<S: AsRef<str>>(raw: &[S], config: &Config) -> (Vec<String>, String) {
    let say = |msg: &str| {
        if config.show_progress {
            println!("{msg}");
        }
    };

    say(&format!("Processing {} words...", raw.len()));
    let filter_progress = Progress::new(
        "Progress",
        raw.len(),
        config.progress_interval,
        config.show_progress,
    );
    let clean = clean_words(raw, &WordFilter::from_config(config), &filter_progress);
    say(&format!("Filtered to {} valid words", clean.len()));

    say("Sorting words...");
    let words = clean.into_sorted();

    say("Converting to JavaScript format...");
    let format_progress = Progress::new(
        "Conversion progress",
        words.len(),
        config.progress_interval,
        config.show_progress,
    );
    let rendered = ArrayLiteral::from_config(config).render(&words, &format_progress);

    (words, rendered)
}

/// Run the whole pipeline described by `config`
pub fn convert(config: &Config) -> Result<ConversionSummary> {
    config.validate()?;
    tracing::debug!(
        "Converting {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let raw = load_lines(&config.input_path)?;
    let raw_count = raw.len();
    let (words, rendered) = render_words(&raw, config);
    drop(raw);

    if config.show_progress {
        println!("Writing to {}...", config.output_path.display());
    }
    write_output(&config.output_path, &rendered)?;

    Ok(ConversionSummary {
        raw_count,
        words,
        output_chars: rendered.chars().count(),
        output_path: config.output_path.clone(),
    })
}
