//! Safex - encrypt environment variables and files to an age recipient.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and execution
//! │   └── output        # Styled diagnostics on stderr
//! └── core/             # Core library components
//!     ├── constants     # Environment variable names and labels
//!     ├── env           # Environment access and snapshot
//!     ├── recipient     # AGE_RECIPIENT loading
//!     ├── collect       # Glob expansion and file reads
//!     ├── cipher        # age encryption with ASCII armor
//!     ├── unit          # Named plaintext payloads
//!     └── pipeline      # Encrypt-and-emit loop
//! ```
//!
//! Every payload is encrypted independently to a single x25519 recipient and
//! printed to stdout as a label line followed by an armored block. Only the
//! holder of the matching identity can read the output.

pub mod cli;
pub mod core;
pub mod error;
