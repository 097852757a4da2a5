//! Per-file progress reporting.
//!
//! This module is separate from the core pipeline logic to allow locpull
//! to be used as a library without printing side effects: the pipeline
//! reports through the [`Reporter`] trait and only the console
//! implementation lives here.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub trait Reporter {
    /// The run started.
    fn pull_started(&mut self) {}

    /// Export of one configured language began.
    fn exporting(&mut self, language: &str);

    /// A rendered file was written.
    fn saved(&mut self, path: &str);

    /// The resolved destination does not exist on disk; nothing was written.
    fn file_missing(&mut self, path: &str);

    /// No destination is configured for this (context, language) pair.
    fn no_destination(&mut self, context: &str, language: &str);
}

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn pull_started(&mut self) {
        println!("\nExport translations");
    }

    fn exporting(&mut self, language: &str) {
        println!("  - Exporting '{}'", language);
    }

    fn saved(&mut self, path: &str) {
        println!("      {} Saved at '{}'", SUCCESS_MARK.green(), path);
    }

    fn file_missing(&mut self, path: &str) {
        println!(
            "      {} '{}' doesn't exist, skipped",
            "-".yellow(),
            path.dimmed()
        );
    }

    fn no_destination(&mut self, context: &str, language: &str) {
        println!(
            "      {} No destination for context '{}' in '{}', skipped",
            "-".yellow(),
            context,
            language
        );
    }
}
