//! `wordlist-js` - convert `words.txt` into `word_list_js.txt`.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wordlist_js::{convert, Config, Error};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Config::load().and_then(|config| convert(&config).map(|summary| (config, summary))) {
        Ok((config, summary)) => {
            if config.show_progress {
                summary.print();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &Error) {
    tracing::debug!("conversion failed: {err:?}");
    eprintln!("Error: {err}");
}
