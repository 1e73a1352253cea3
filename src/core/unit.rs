//! Named plaintext payloads scheduled for encryption.

use zeroize::Zeroizing;

/// A single payload and the label printed above its ciphertext.
///
/// The payload is wiped from memory when the unit is dropped.
pub struct InputUnit {
    pub name: String,
    pub payload: Zeroizing<Vec<u8>>,
}

impl InputUnit {
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload: Zeroizing::new(payload),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl std::fmt::Debug for InputUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputUnit")
            .field("name", &self.name)
            .field("len", &self.payload.len())
            .finish()
    }
}
