//! Styled console output for pipeline progress.
//!
//! All progress goes to stdout; diagnostics for fatal errors are printed by
//! `main` on stderr. Nothing here is a machine-readable contract.

use console::style;

/// Print a stage announcement (e.g. "rendering template ...").
pub fn stage(msg: &str) {
    println!("{} {msg}", style("==>").cyan().bold());
}

/// Print a per-item success line, indented under the current stage.
pub fn ok(msg: &str) {
    println!("  {} {msg}", style("✓").green());
}

/// Print a per-item informational line, indented under the current stage.
pub fn note(msg: &str) {
    println!("  {} {msg}", style("·").blue());
}

/// Print the final success line.
pub fn done(msg: &str) {
    println!("{} {msg}", style("done:").green().bold());
}
