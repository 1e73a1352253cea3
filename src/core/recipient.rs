//! Recipient loading.
//!
//! The recipient public key comes from `AGE_RECIPIENT` and is parsed once per
//! run. Every encryption borrows it read-only.

use ::age::x25519;
use tracing::debug;

use crate::core::constants::{RECIPIENT_ENV, RECIPIENT_PREFIX};
use crate::core::env::EnvSource;
use crate::error::{Error, Result};

/// Load and parse the recipient from the environment.
///
/// # Errors
///
/// - `Error::MissingRecipient` if the variable is unset or empty
/// - `Error::RecipientPrefix` if it does not start with `age1`
/// - `Error::InvalidRecipient` if it has the prefix but fails to parse
pub fn load(source: &impl EnvSource) -> Result<x25519::Recipient> {
    let raw = source.var(RECIPIENT_ENV).unwrap_or_default();
    if raw.is_empty() {
        return Err(Error::MissingRecipient);
    }
    parse(&raw)
}

/// Parse a public key string into an age recipient.
///
/// The value is used verbatim; surrounding whitespace is not stripped.
pub fn parse(key: &str) -> Result<x25519::Recipient> {
    if !key.starts_with(RECIPIENT_PREFIX) {
        return Err(Error::RecipientPrefix {
            prefix: RECIPIENT_PREFIX,
        });
    }

    let recipient = key
        .parse::<x25519::Recipient>()
        .map_err(|_| Error::InvalidRecipient(key.to_string()))?;

    debug!(recipient = %recipient, "loaded recipient");
    Ok(recipient)
}
