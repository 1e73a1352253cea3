//! Safex - encrypt environment variables and files to an age recipient.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use safex::cli::{abort, execute, Cli};
use safex::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for ciphertext
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("safex=debug")
        } else {
            EnvFilter::new("safex=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        abort(&e);
    }
}
