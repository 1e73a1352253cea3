//! Error types for safex.
//!
//! Two classes of failure exist: fatal ones (the recipient cannot be loaded,
//! stdout is gone) and per-unit ones (a single file or encryption step
//! failed). The pipeline decides which errors end the run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("AGE_RECIPIENT is not set")]
    MissingRecipient,

    #[error("AGE_RECIPIENT must be an age public key starting with {prefix}")]
    RecipientPrefix { prefix: &'static str },

    #[error("invalid age public key: {0}")]
    InvalidRecipient(String),

    #[error("error reading {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error ends the whole run rather than a single unit.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::ReadFile { .. } | Error::Cipher(_))
    }
}

/// Encryption failures, one variant per stage of the writer chain.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("failed to create encryptor: {0}")]
    Encryptor(String),

    #[error("failed to write to encrypted stream: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to close encrypted stream: {0}")]
    Finish(#[source] std::io::Error),

    #[error("failed to close armor: {0}")]
    Armor(#[source] std::io::Error),

    #[error("armored output is not valid UTF-8: {0}")]
    Utf8(String),
}

pub type Result<T> = std::result::Result<T, Error>;
