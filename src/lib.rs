//! `wordlist-js` - turns a plain word list into a JavaScript array literal.
//!
//! The output is a single `window.wordList = [...];` statement that a
//! front-end script can load to drive word suggestions.

pub mod config;
pub mod constants;
pub mod error;
pub mod progress;
pub mod wordlist;

pub use config::Config;
pub use error::{Error, Result};
pub use wordlist::{convert, ConversionSummary};
