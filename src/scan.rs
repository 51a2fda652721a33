//! Photos directory scanning and manifest construction.
//!
//! The batch half of the crate. Walks a photos root of numerically named
//! album directories and produces the [`Manifest`] the site loads at session
//! start.
//!
//! ## Directory Structure
//!
//! ```text
//! Photos/                  # Photos root (fatal error if missing)
//! ├── 1/                   # Album 1 (numeric name = album)
//! │   ├── 1.jpg            # Image 1
//! │   ├── 2.JPG            # Extension is case-insensitive
//! │   └── 03.jpeg          # Leading zeros fine, same slot as "3"
//! ├── 2/                   # Album 2
//! ├── 10/                  # Sorts after 2, not between 1 and 2
//! ├── notanumber/          # Skipped, not an error
//! └── readme.txt           # Files at this level are skipped too
//! ```
//!
//! Each album's count is the highest image index present, not the number of
//! files: an album holding only `7.jpg` counts 7 slots. An album with no
//! matching images still gets an entry with count `0`.
//!
//! ## Failure Semantics
//!
//! Exactly one failure is fatal: a missing (or non-directory) photos root.
//! An album directory that cannot be read is reported as a warning and
//! excluded; the rest of the scan completes normally.
//!
//! ## Parallel Scanning
//!
//! Albums are independent units of work and are scanned with a
//! [rayon](https://docs.rs/rayon) fan-out. Workers share nothing; entries
//! fan in to one vector and are sorted in a single pass at the end.

use crate::manifest::{AlbumEntry, Manifest, ManifestError};
use crate::naming;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Photos directory not found: {0}")]
    MissingPhotosRoot(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Recoverable per-album problem. The album is excluded from the manifest
/// and the scan continues.
#[derive(Error, Debug)]
pub enum ScanWarning {
    #[error("Skipped unreadable album directory {path}: {source}")]
    UnreadableAlbum {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a scan: the manifest plus anything worth telling the user.
#[derive(Debug)]
pub struct ScanOutcome {
    pub manifest: Manifest,
    pub warnings: Vec<ScanWarning>,
}

/// Scan the photos root into a manifest.
///
/// The caller observes a single completed result or a single fatal error;
/// per-album parallelism is internal.
pub fn scan(root: &Path) -> Result<ScanOutcome, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingPhotosRoot(root.to_path_buf()));
    }

    let albums = collect_album_dirs(root)?;

    // Fan out per album, fan in to one vector. Sorting happens once inside
    // Manifest::from_entries, never incrementally under concurrent workers.
    let results: Vec<Result<AlbumEntry, ScanWarning>> = albums
        .par_iter()
        .map(|(album_id, path)| scan_album(*album_id, path))
        .collect();

    let mut entries = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();
    for result in results {
        match result {
            Ok(entry) => entries.push(entry),
            Err(warning) => warnings.push(warning),
        }
    }

    let manifest = Manifest::from_entries(entries)?;
    Ok(ScanOutcome { manifest, warnings })
}

/// Immediate subdirectories of the root whose names are purely numeric.
/// Everything else at this level is silently skipped.
fn collect_album_dirs(root: &Path) -> Result<Vec<(u32, PathBuf)>, ScanError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(album_id) = naming::parse_album_id(&name.to_string_lossy()) {
            dirs.push((album_id, path));
        }
    }
    Ok(dirs)
}

/// Compute one album's entry: the highest matching image index, or 0.
fn scan_album(album_id: u32, path: &Path) -> Result<AlbumEntry, ScanWarning> {
    let unreadable = |source: io::Error| ScanWarning::UnreadableAlbum {
        path: path.to_path_buf(),
        source,
    };

    let mut max_index = 0u32;
    for entry in fs::read_dir(path).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(index) = naming::parse_image_index(&entry.file_name().to_string_lossy()) {
            max_index = max_index.max(index);
        }
    }

    Ok(AlbumEntry {
        album_id,
        max_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{album_counts, make_album};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_fatal() {
        let result = scan(Path::new("/does/not/exist"));
        assert!(matches!(result, Err(ScanError::MissingPhotosRoot(_))));
    }

    #[test]
    fn root_that_is_a_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Photos");
        fs::write(&file, "not a directory").unwrap();

        let result = scan(&file);
        assert!(matches!(result, Err(ScanError::MissingPhotosRoot(_))));
    }

    #[test]
    fn empty_root_yields_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        let outcome = scan(tmp.path()).unwrap();
        assert!(outcome.manifest.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn albums_sorted_numerically_regardless_of_listing_order() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "10", &["1.jpg"]);
        make_album(tmp.path(), "2", &["1.jpg"]);
        make_album(tmp.path(), "1", &["1.jpg"]);

        let outcome = scan(tmp.path()).unwrap();
        let ids: Vec<u32> = outcome
            .manifest
            .entries()
            .iter()
            .map(|e| e.album_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn non_numeric_entries_are_skipped() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1", &["1.jpg"]);
        make_album(tmp.path(), "2", &["1.jpg"]);
        make_album(tmp.path(), "10", &["1.jpg"]);
        make_album(tmp.path(), "notanumber", &["1.jpg"]);
        fs::write(tmp.path().join("readme.txt"), "hello").unwrap();

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(album_counts(&outcome.manifest), vec![(1, 1), (2, 1), (10, 1)]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn count_is_max_index_not_file_count() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1", &["7.jpg"]);

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(outcome.manifest.count_for(1), Some(7));
    }

    #[test]
    fn only_matching_filenames_counted() {
        let tmp = TempDir::new().unwrap();
        make_album(
            tmp.path(),
            "3",
            &["1.jpg", "2.JPG", "03.jpeg", "cover.png", "5.jpg.bak"],
        );

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(outcome.manifest.count_for(3), Some(3));
    }

    #[test]
    fn album_with_no_matching_images_still_emitted() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "5", &["cover.png", "notes.txt"]);
        make_album(tmp.path(), "6", &[]);

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(outcome.manifest.count_for(5), Some(0));
        assert_eq!(outcome.manifest.count_for(6), Some(0));
    }

    #[test]
    fn subdirectories_inside_albums_are_ignored() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1", &["2.jpg"]);
        fs::create_dir_all(tmp.path().join("1").join("9")).unwrap();

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(outcome.manifest.count_for(1), Some(2));
    }

    #[test]
    fn whitespace_tolerant_filenames() {
        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1", &["1 .jpg", "2.jpg"]);

        let outcome = scan(tmp.path()).unwrap();
        assert_eq!(outcome.manifest.count_for(1), Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_album_is_warned_and_excluded() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        make_album(tmp.path(), "1", &["1.jpg"]);
        make_album(tmp.path(), "2", &["1.jpg"]);

        let locked = tmp.path().join("2");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not bind root; nothing to observe there.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let outcome = scan(tmp.path()).unwrap();

        // Restore so TempDir can clean up.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(album_counts(&outcome.manifest), vec![(1, 1)]);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0],
            ScanWarning::UnreadableAlbum { .. }
        ));
    }
}
