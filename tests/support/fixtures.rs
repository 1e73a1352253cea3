//! Test fixtures and constants.

/// A valid age public key with no matching identity in these tests.
pub const OTHER_PUBLIC_KEY: &str = "age1ql3z7hjy54pw3hyww5ayyfg7zqgvc7w3j2elw8zmrj2kg5sfn9aqmcac8p";

/// Keys that fail the prefix check.
pub const BAD_PREFIX_KEYS: &[&str] = &[
    "not-a-valid-age-key",
    "AGE1QL3Z7HJY54PW3HYWW5AYYFG7ZQGVC7W3J2ELW8ZMRJ2KG5SFN9AQMCAC8P",
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIFake",
];

/// A key with the right prefix that is not valid bech32.
pub const MALFORMED_KEY: &str = "age1thisisnotavalidkey";

/// Label of the environment block.
pub const ENV_LABEL: &str = "Environment variables";
