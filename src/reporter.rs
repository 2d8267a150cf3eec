//! Progress and summary output.
//!
//! This module is separate from the core library logic so langfill can be
//! used as a library without printing side effects.

use colored::Colorize;

use crate::reconcile::RunSummary;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the scan banner with the resolved paths.
pub fn print_start(scan_path: &str, lang_path: &str) {
    println!("Scanning for translations in: {}", scan_path.bold());
    println!("Translations root: {}", lang_path.dimmed());
}

/// List the keys found in a single file (detailed mode only).
pub fn print_file_keys(relative_path: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    println!("Found translations in {}:", relative_path.cyan());
    for key in keys {
        println!("  - {}", key);
    }
}

/// Report one placeholder insertion (detailed mode only).
pub fn print_added(locale: &str, group: Option<&str>, key: &str) {
    match group {
        Some(group) => println!(
            "{}: {}.{}.{}",
            "Added missing translation".yellow(),
            locale,
            group,
            key
        ),
        None => println!(
            "{}: {}.{}",
            "Added missing string translation".yellow(),
            locale,
            key
        ),
    }
}

/// Warn about a file that could not be read or decoded.
pub fn warn_skipped_file(path: &std::path::Path, message: &str) {
    eprintln!(
        "{} Skipping {}: {}",
        "warning:".bold().yellow(),
        path.display(),
        message
    );
}

/// Warn about a failure that did not abort the run.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print the end-of-run summary.
pub fn print_summary(summary: &RunSummary, verbose: bool) {
    println!(
        "Found {} group keys and {} string keys.",
        summary.grouped_found, summary.flat_found
    );

    if summary.grouped_added > 0 {
        println!(
            "Added {} new translations to group files",
            summary.grouped_added.to_string().green()
        );
    }
    if summary.flat_added > 0 {
        println!(
            "Added {} new translations to JSON files",
            summary.flat_added.to_string().green()
        );
    }
    if summary.vendor_migrated {
        println!("Merged deprecated vendor.json into the default locale");
    }
    if verbose && summary.files_skipped > 0 {
        println!(
            "{} file(s) could not be read and were skipped",
            summary.files_skipped
        );
    }

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Translation scan completed ({} {} scanned)",
            summary.files_scanned,
            if summary.files_scanned == 1 {
                "file"
            } else {
                "files"
            }
        )
        .green()
    );
}
