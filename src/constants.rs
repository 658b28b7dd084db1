//! Application constants.
//!
//! Centralizes the fixed file names, filter bounds and output layout.

/// Default file locations, relative to the working directory.
pub mod files {
    /// Word list read by the converter.
    pub const DEFAULT_INPUT: &str = "words.txt";

    /// File the array-literal declaration is written to.
    pub const DEFAULT_OUTPUT: &str = "word_list_js.txt";
}

/// Word acceptance bounds.
pub mod filter {
    /// Shortest accepted word, in letters.
    pub const MIN_WORD_LEN: usize = 2;

    /// Longest accepted word, in letters.
    pub const MAX_WORD_LEN: usize = 20;
}

/// Array-literal layout.
pub mod format {
    /// Identifier the array is assigned to.
    pub const DEFAULT_DECLARATION: &str = "window.wordList";

    /// Words per output row.
    pub const WORDS_PER_LINE: usize = 10;

    /// Indentation in front of every row of words.
    pub const ROW_INDENT: &str = "            ";

    /// Indentation in front of the closing `];`.
    pub const CLOSING_INDENT: &str = "        ";
}

/// Progress reporting cadence.
pub mod progress {
    /// Report progress every this many items.
    pub const DEFAULT_INTERVAL: usize = 1000;

    /// Number of words echoed from each end of the list in the summary.
    pub const SAMPLE_SIZE: usize = 20;
}
