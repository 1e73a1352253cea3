//! Environment access.
//!
//! All reads of the process environment go through [`EnvSource`] so the
//! recipient loader and the snapshot can run against a fixed set of
//! variables in tests.

use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::core::constants::ENV_LABEL;
use crate::core::unit::InputUnit;

/// Read access to a set of environment variables.
pub trait EnvSource {
    /// Value of a single variable, if set and valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;

    /// Every variable, in the order the source exposes them.
    fn vars(&self) -> Vec<(OsString, OsString)>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Vec<(OsString, OsString)> {
        std::env::vars_os().collect()
    }
}

/// A fixed, ordered set of variables.
#[derive(Debug, Default, Clone)]
pub struct FixedEnv {
    vars: Vec<(String, String)>,
}

impl FixedEnv {
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for FixedEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn vars(&self) -> Vec<(OsString, OsString)> {
        self.vars
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }
}

/// Capture the environment as a single unit.
///
/// The payload is every `KEY=VALUE` entry joined by `\n`, with no trailing
/// newline.
pub fn snapshot(source: &impl EnvSource) -> InputUnit {
    let vars = source.vars();
    let mut payload = Vec::new();

    for (i, (key, value)) in vars.iter().enumerate() {
        if i > 0 {
            payload.push(b'\n');
        }
        payload.extend_from_slice(&os_bytes(key));
        payload.push(b'=');
        payload.extend_from_slice(&os_bytes(value));
    }

    debug!(vars = vars.len(), bytes = payload.len(), "captured environment");
    InputUnit::new(ENV_LABEL, payload)
}

#[cfg(unix)]
fn os_bytes(s: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    s.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn os_bytes(s: &OsStr) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}
