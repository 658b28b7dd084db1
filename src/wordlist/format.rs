//! Renders a word list as a JavaScript array-literal assignment.
//!
//! ```text
//! window.wordList = [
//!             'w1', 'w2', ..., 'w10',
//!             'w11', ...
//!         ];
//! ```
//!
//! Every row, the first included, starts with the row indent. Rows end with a
//! bare `,` so the output carries no trailing whitespace.

use crate::config::Config;
use crate::constants::format::{CLOSING_INDENT, ROW_INDENT};
use crate::progress::Progress;

/// Layout of the generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteral {
    declaration: String,
    words_per_line: usize,
}

impl Default for ArrayLiteral {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ArrayLiteral {
    /// Assign to `declaration`, wrapping after every `words_per_line` words
    pub fn new(declaration: impl Into<String>, words_per_line: usize) -> Self {
        Self {
            declaration: declaration.into(),
            words_per_line: words_per_line.max(1),
        }
    }

    /// Layout taken from the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.declaration.clone(), config.words_per_line)
    }

    /// Render `words` in the given order.
    ///
    /// Words are expected to be validated already; they are quoted verbatim.
    pub fn render<S: AsRef<str>>(&self, words: &[S], progress: &Progress) -> String {
        let mut out = format!("{} = [\n", self.declaration);

        for (i, word) in words.iter().enumerate() {
            progress.tick(i);

            if i == 0 {
                out.push_str(ROW_INDENT);
            } else if i % self.words_per_line == 0 {
                out.push_str(",\n");
                out.push_str(ROW_INDENT);
            } else {
                out.push_str(", ");
            }
            out.push('\'');
            out.push_str(word.as_ref());
            out.push('\'');
        }

        out.push('\n');
        out.push_str(CLOSING_INDENT);
        out.push_str("];");
        progress.finish();

        tracing::debug!("Rendered {} words into {} characters", words.len(), out.len());
        out
    }
}
