//! Shared test utilities for the folio test suite.
//!
//! Fixtures are built programmatically: tests describe a photos tree as
//! album names plus filenames, and get an isolated temp directory they can
//! mutate freely.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! make_album(tmp.path(), "3", &["1.jpg", "2.JPG"]);
//!
//! let outcome = crate::scan::scan(tmp.path()).unwrap();
//! assert_eq!(album_counts(&outcome.manifest), vec![(3, 2)]);
//! ```

use crate::manifest::Manifest;
use std::fs;
use std::path::Path;

/// Create one album directory under `root` with the given filenames.
///
/// File contents are placeholder bytes; the scanner only reads names.
pub fn make_album(root: &Path, name: &str, files: &[&str]) {
    let album = root.join(name);
    fs::create_dir_all(&album).unwrap();
    for file in files {
        fs::write(album.join(file), "fake image").unwrap();
    }
}

/// Flatten a manifest to `(album_id, max_index)` pairs for assertions.
pub fn album_counts(manifest: &Manifest) -> Vec<(u32, u32)> {
    manifest
        .entries()
        .iter()
        .map(|e| (e.album_id, e.max_index))
        .collect()
}
