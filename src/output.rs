//! CLI output formatting for the manifest builder.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display for
//! every album is its semantic identity (id and photo count), with the
//! source directory shown as secondary context via an indented `Source:`
//! line. Warnings get their own section so a partially failed scan is
//! obvious without scrolling.
//!
//! # Output Format
//!
//! ```text
//! Albums
//! 001 Album 1 (12 photos)
//!     Source: 1/
//! 002 Album 2 (no photos)
//!     Source: 2/
//! 003 Album 10 (7 photos)
//!     Source: 10/
//!
//! Warnings
//!     Skipped unreadable album directory Photos/4: permission denied
//!
//! 3 albums, 19 photo slots
//! ```
//!
//! # Architecture
//!
//! The format function is pure (returns `Vec<String>`, no I/O) for
//! testability; `print_scan_output` is the stdout wrapper the CLI calls.

use crate::scan::ScanOutcome;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Photo-count suffix: `(12 photos)`, `(1 photo)`, `(no photos)`.
fn count_suffix(count: u32) -> String {
    match count {
        0 => "(no photos)".to_string(),
        1 => "(1 photo)".to_string(),
        n => format!("({n} photos)"),
    }
}

/// Format scan output showing the discovered album structure.
pub fn format_scan_output(outcome: &ScanOutcome, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Albums".to_string());
    if outcome.manifest.is_empty() {
        lines.push(format!(
            "    No numeric album directories in {}",
            source_root.display()
        ));
    }
    for (pos, entry) in outcome.manifest.entries().iter().enumerate() {
        lines.push(format!(
            "{} Album {} {}",
            format_index(pos + 1),
            entry.album_id,
            count_suffix(entry.max_index)
        ));
        lines.push(format!("    Source: {}/", entry.album_id));
    }

    if !outcome.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &outcome.warnings {
            lines.push(format!("    {warning}"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} albums, {} photo slots",
        outcome.manifest.len(),
        outcome.manifest.total_images()
    ));

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(outcome: &ScanOutcome, source_root: &Path) {
    for line in format_scan_output(outcome, source_root) {
        println!("{line}");
    }
}
