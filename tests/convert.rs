//! End-to-end tests for the word list conversion pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashSet;
use std::path::Path;

use tempfile::TempDir;
use wordlist_js::{convert, Config, Error};

// Helper: write `input` as words.txt in a fresh directory and point a quiet config at it
fn setup(input: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("words.txt");
    std::fs::write(&input_path, input).unwrap();

    let config = Config {
        input_path,
        output_path: dir.path().join("word_list_js.txt"),
        show_progress: false,
        ..Config::default()
    };
    (dir, config)
}

// Pull the quoted words back out of a rendered declaration
fn quoted_words(output: &str) -> Vec<String> {
    output
        .split('\'')
        .skip(1)
        .step_by(2)
        .map(String::from)
        .collect()
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn mixed_input_keeps_only_valid_unique_words() {
    let (_dir, config) = setup("Cat\ncat\ndog!\na\nsupercalifragilisticexpialidocious123\nzebra\n");

    let summary = convert(&config).unwrap();
    assert_eq!(summary.raw_count, 6);
    assert_eq!(summary.words, vec!["cat", "zebra"]);

    let output = read(&config.output_path);
    assert_eq!(
        output,
        "window.wordList = [\n            'cat', 'zebra'\n        ];"
    );
    assert_eq!(summary.output_chars, output.chars().count());
}

#[test]
fn twenty_five_words_wrap_after_tenth_and_twentieth() {
    let words: Vec<String> = (b'a'..=b'y')
        .map(|c| format!("{0}{0}word", char::from(c)))
        .collect();
    let (_dir, config) = setup(&words.join("\n"));

    convert(&config).unwrap();
    let output = read(&config.output_path);
    let rows: Vec<&str> = output
        .lines()
        .filter(|line| line.trim_start().starts_with('\''))
        .collect();

    assert_eq!(rows.len(), 3);
    assert!(rows[0].trim_end().ends_with("'jjword',"));
    assert!(rows[1].trim_end().ends_with("'ttword',"));
    assert!(rows[2].ends_with("'yyword'"));
    assert!(output.ends_with("'yyword'\n        ];"));
}

#[test]
fn output_words_are_unique_sorted_and_valid() {
    let input = "\
        banana\n  Apple  \nBANANA\ncherry pie\nkiwi\nk\nkiwi\n\n\
        x-ray\nzucchini\r\nelderberry\nÉclair\nfig\nthisiswaytoolongtobeaword\n";
    let (_dir, config) = setup(input);

    convert(&config).unwrap();
    let words = quoted_words(&read(&config.output_path));

    assert_eq!(words, vec!["apple", "banana", "elderberry", "fig", "kiwi", "zucchini"]);
    let unique: HashSet<&String> = words.iter().collect();
    assert_eq!(unique.len(), words.len());
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(words
        .iter()
        .all(|w| (2..=20).contains(&w.len()) && w.bytes().all(|b| b.is_ascii_lowercase())));
}

#[test]
fn rerun_is_byte_identical() {
    let (_dir, config) = setup("pear\nPlum\napple\nplum\nquince\n");

    convert(&config).unwrap();
    let first = std::fs::read(&config.output_path).unwrap();
    convert(&config).unwrap();
    let second = std::fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn shuffled_input_gives_same_output() {
    let (_dir_a, config_a) = setup("delta\nalpha\ncharlie\nbravo\n");
    let (_dir_b, config_b) = setup("bravo\ncharlie\nALPHA\ndelta\nalpha\n");

    convert(&config_a).unwrap();
    convert(&config_b).unwrap();

    assert_eq!(read(&config_a.output_path), read(&config_b.output_path));
}

#[test]
fn missing_input_reports_path_and_writes_nothing() {
    let (dir, mut config) = setup("");
    config.input_path = dir.path().join("absent.txt");

    let err = convert(&config).unwrap_err();
    assert!(err.is_input_not_found());
    assert!(err.to_string().contains("absent.txt"));
    assert!(!config.output_path.exists());
}

#[test]
fn failed_read_leaves_existing_output_untouched() {
    let (_dir, config) = setup("");
    std::fs::write(&config.input_path, [0xff, 0xfe, 0x0a]).unwrap();
    std::fs::write(&config.output_path, "previous").unwrap();

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert_eq!(read(&config.output_path), "previous");
}

#[test]
fn unwritable_output_is_a_write_error() {
    let (dir, mut config) = setup("cat\ndog\n");
    config.output_path = dir.path().join("no_such_dir").join("out.txt");

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn empty_input_writes_empty_array() {
    let (_dir, config) = setup("");

    let summary = convert(&config).unwrap();
    assert_eq!(summary.word_count(), 0);
    assert_eq!(read(&config.output_path), "window.wordList = [\n\n        ];");
}

#[test]
fn invalid_config_is_rejected_before_reading() {
    let (_dir, mut config) = setup("cat\n");
    config.words_per_line = 0;

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn progress_output_does_not_change_result() {
    let (_dir, mut config) = setup("cat\ndog\n");
    config.show_progress = true;
    config.progress_interval = 1;

    let summary = convert(&config).unwrap();
    assert_eq!(summary.words, vec!["cat", "dog"]);
}
