//! Age encryption with ASCII armor.
//!
//! Each call builds a fresh writer chain: age stream writer into armor
//! writer into an in-memory buffer. The file key is random, so encrypting the
//! same payload twice gives different ciphertext.

use std::io::Write;

use ::age::armor::{ArmoredWriter, Format};
use ::age::x25519;
use tracing::trace;

use crate::error::{CipherError, Result};

/// Encrypt `payload` to a single recipient and return the armored text.
///
/// # Errors
///
/// Returns a `CipherError` naming the stage that failed.
pub fn encrypt(recipient: &x25519::Recipient, payload: &[u8]) -> Result<String> {
    trace!(plaintext_len = payload.len(), "encrypting");

    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(recipient as &dyn age::Recipient))
            .map_err(|e| CipherError::Encryptor(e.to_string()))?;

    let mut encrypted = Vec::new();
    let armor = ArmoredWriter::wrap_output(&mut encrypted, Format::AsciiArmor)
        .map_err(CipherError::Armor)?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| CipherError::Encryptor(e.to_string()))?;

    writer.write_all(payload).map_err(CipherError::Write)?;
    let armor = writer.finish().map_err(CipherError::Finish)?;
    armor.finish().map_err(CipherError::Armor)?;

    trace!(ciphertext_len = encrypted.len(), "encrypted");

    String::from_utf8(encrypted).map_err(|e| CipherError::Utf8(e.to_string()).into())
}
