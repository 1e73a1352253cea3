//! Core library components.
//!
//! Recipient loading, input collection and encryption. Nothing in here
//! prints; reporting belongs to the CLI layer.

pub mod cipher;
pub mod collect;
pub mod constants;
pub mod env;
pub mod pipeline;
pub mod recipient;
pub mod unit;
