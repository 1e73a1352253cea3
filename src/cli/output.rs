//! Styled diagnostics for the terminal.
//!
//! Everything here goes to stderr; stdout carries only ciphertext blocks.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: paths, hints

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ error reading /etc/shadow: Permission denied`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ generate a key pair with: age-keygen`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").for_stderr().cyan(),
            style(msg).for_stderr().cyan()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).for_stderr().cyan().to_string()
    } else {
        p.to_string()
    }
}
