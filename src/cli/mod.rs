//! Command-line interface.

pub mod output;

use std::io;

use clap::Parser;

use crate::core::env::ProcessEnv;
use crate::core::pipeline::{Pipeline, Report, Summary};
use crate::core::recipient;
use crate::error::{Error, Result};

const AFTER_HELP: &str = "\
safex always includes environment variables in its output.

You must specify the recipient's public key as an environment variable:
    AGE_RECIPIENT=age1szal3cwkhdseyl67ljypnjzt2zu8drfhksq0n2s4hp0r7jtrxv9sfe80mn
You can generate a new key pair by running age-keygen locally.

Examples:
    safex
    safex /etc/passwd
    safex '/path/to/my/storage/**/*'";

/// Safex - encrypt environment variables and files to an age recipient.
#[derive(Parser, Debug)]
#[command(
    name = "safex",
    about = "Safely encrypt and export sensitive data from a machine using age",
    version,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Glob patterns of files to include (`**` matches any depth)
    #[arg(value_name = "GLOB", trailing_var_arg = true)]
    pub patterns: Vec<String>,
}

/// Prints skipped units to stderr.
struct Stderr;

impl Report for Stderr {
    fn skipped(&mut self, name: &str, err: &Error) {
        output::error(&skip_message(name, err));
    }
}

/// Read errors already carry their path; other failures get the unit name.
fn skip_message(name: &str, err: &Error) -> String {
    match err {
        Error::ReadFile { .. } => err.to_string(),
        _ => format!("{}: {}", output::path(name), err),
    }
}

/// Load the recipient and emit every unit to stdout.
///
/// # Errors
///
/// Fails if the recipient cannot be loaded or stdout cannot be written.
/// Per-file problems are printed and do not fail the run.
pub fn execute(cli: &Cli) -> Result<Summary> {
    let env = ProcessEnv;
    let recipient = recipient::load(&env)?;

    let stdout = io::stdout();
    Pipeline::new(&recipient, stdout.lock(), Stderr).run(&env, &cli.patterns)
}

/// Print a fatal error and exit with status 1.
pub fn abort(err: &Error) -> ! {
    output::error(&err.to_string());
    match err {
        Error::MissingRecipient | Error::RecipientPrefix { .. } | Error::InvalidRecipient(_) => {
            output::hint("generate a key pair with: age-keygen")
        }
        _ => {}
    }
    std::process::exit(1);
}
