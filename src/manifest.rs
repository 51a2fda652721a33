//! Manifest and work-list types shared by the builder and the site.
//!
//! The manifest is the sole persisted contract: a JSON object whose keys are
//! string-encoded album ids in ascending numeric order and whose values are
//! the highest image index found in each album.
//!
//! ```json
//! {
//!   "1": 12,
//!   "2": 0,
//!   "10": 7
//! }
//! ```
//!
//! JSON objects are nominally unordered, but the artifact is deterministic:
//! keys always appear in ascending numeric order (`"2"` before `"10"`), and
//! deserialization restores the identical ordered sequence. A value of `0`
//! is meaningful: the album directory exists but holds no matching images.
//!
//! Consumers load the manifest once at session start and treat it as
//! read-only configuration; there are no incremental updates.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Duplicate album id {0} in manifest")]
    DuplicateAlbumId(u32),
}

/// One album's slot in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumEntry {
    /// Numeric directory name under the photos root.
    pub album_id: u32,
    /// Highest image index found; `0` for an empty album.
    pub max_index: u32,
}

/// Ordered album → count mapping, strictly ascending by album id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    entries: Vec<AlbumEntry>,
}

impl Manifest {
    /// Build a manifest from entries in any order.
    ///
    /// Sorts once by numeric album id. Directory names make duplicate ids
    /// impossible in practice, but the invariant is still checked here.
    pub fn from_entries(mut entries: Vec<AlbumEntry>) -> Result<Self, ManifestError> {
        entries.sort_by_key(|e| e.album_id);
        for pair in entries.windows(2) {
            if pair[0].album_id == pair[1].album_id {
                return Err(ManifestError::DuplicateAlbumId(pair[0].album_id));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in ascending album-id order.
    pub fn entries(&self) -> &[AlbumEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Image count for one album, if it exists in the manifest.
    pub fn count_for(&self, album_id: u32) -> Option<u32> {
        self.entries
            .binary_search_by_key(&album_id, |e| e.album_id)
            .ok()
            .map(|i| self.entries[i].max_index)
    }

    /// Total image slots across all albums.
    pub fn total_images(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.max_index)).sum()
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.album_id.to_string(), &entry.max_index)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = Manifest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of numeric album ids to image counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Manifest, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, max_index)) = access.next_entry::<String, u32>()? {
                    let album_id = key
                        .parse::<u32>()
                        .map_err(|_| de::Error::custom(format!("non-numeric album id: {key:?}")))?;
                    entries.push(AlbumEntry {
                        album_id,
                        max_index,
                    });
                }
                Manifest::from_entries(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}

/// One slot in the flattened work list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    /// Album the slot belongs to.
    pub album_id: u32,
    /// 1-based index within the album.
    pub index: u32,
    /// Image source the view renders, e.g. `/photos/3/7.jpg`.
    pub src: String,
    /// Display caption, numbered across the whole list: `Work 12`.
    pub title: String,
}

/// The flat sequence the detail view pages through.
///
/// Flattens the manifest in album order, one slot per image index from 1 to
/// the album's count. Its length is the `total` fed to the page clamp in the
/// single-album simplified mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkList {
    works: Vec<Work>,
}

impl WorkList {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut works = Vec::new();
        for entry in manifest.entries() {
            for index in 1..=entry.max_index {
                let position = works.len() + 1;
                works.push(Work {
                    album_id: entry.album_id,
                    index,
                    src: format!("/photos/{}/{}.jpg", entry.album_id, index),
                    title: format!("Work {position}"),
                });
            }
        }
        Self { works }
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Page count for the clamp helpers.
    pub fn total_pages(&self) -> u32 {
        self.works.len() as u32
    }

    /// The work shown for a 1-based page number, clamped into range.
    ///
    /// `None` only when the list is empty.
    pub fn for_page(&self, page: u32) -> Option<&Work> {
        self.works
            .get(crate::route::work_index(page, self.total_pages()))
    }
}
