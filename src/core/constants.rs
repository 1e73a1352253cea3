//! Constants used throughout safex.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the recipient public key.
pub const RECIPIENT_ENV: &str = "AGE_RECIPIENT";

/// Required prefix of an age x25519 public key.
pub const RECIPIENT_PREFIX: &str = "age1";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SAFEX_LOG";

/// Label of the environment snapshot unit.
pub const ENV_LABEL: &str = "Environment variables";
