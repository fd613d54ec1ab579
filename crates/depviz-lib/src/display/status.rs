//! Status display for user feedback
//!
//! Semantic status lines printed to stdout. Logging goes through `tracing`
//! instead; these lines are the program's actual output.

use super::styling::{BULLET, StyleManager};
use std::io::{self, Write};

/// Width of the rules framing verbatim blocks
const RULE_WIDTH: usize = 60;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Display a working status
    ///
    /// Output: `› Resolving Serilog...`
    pub fn working(&self, task: &str) {
        println!("{}", self.styling.format_working(&format!("{}...", task)));
        io::stdout().flush().unwrap_or(());
    }

    /// Display a success status with optional details
    ///
    /// Output: `✓ Graph built: 12 packages`
    pub fn success(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_success(&join_details(item, details)));
    }

    /// Output: `✗ Serilog: not found`
    pub fn error(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_error(&join_details(item, details)));
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    /// Display a simple message without status symbols
    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }

    /// Display a list of items with bullets
    pub fn list<S: AsRef<str>>(&self, items: &[S]) {
        for item in items {
            println!("  {} {}", BULLET, item.as_ref());
        }
    }

    /// Display a header for a section of work
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.styling.style_emphasis(title));
    }

    /// Output: `[1/3] Newtonsoft.Json 13.0.1`
    pub fn step(&self, current: usize, total: usize, description: &str) {
        let prefix = format!("[{}/{}]", current, total);
        println!("{} {}", self.styling.style_subtle(&prefix), description);
    }

    /// Print `body` verbatim between two rules
    pub fn verbatim(&self, caption: &str, body: &str) {
        println!("{}", self.styling.format_rule(caption, RULE_WIDTH));
        print!("{}", body);
        if !body.ends_with('\n') {
            println!();
        }
        println!("{}", self.styling.format_rule("", RULE_WIDTH));
    }
}

fn join_details(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{}: {}", item, details)
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
