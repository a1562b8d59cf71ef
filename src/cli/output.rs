//! Shared CLI output helpers for consistent terminal output.
//!
//! Styling goes through `console`, which disables color automatically when
//! `NO_COLOR` is set or the stream is not a terminal.
//!
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ Done.`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ file not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --repo <owner/repo> explicitly`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  repo:  acme/widgets`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with bullet.
///
/// Example: `  • API_KEY`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}
