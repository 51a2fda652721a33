//! # Folio
//!
//! The working core of a single-page photo portfolio: a hash-fragment router
//! for the client view and the batch tool that generates the works manifest
//! the view paginates over. Your filesystem is the data source: numeric
//! directories under `Photos/` become albums, numeric JPEG filenames become
//! image slots, and `works.json` is the single artifact tying them together.
//!
//! # Architecture: Two Independent Components
//!
//! ```text
//! 1. Manifest build    Photos/   →  works.json   (filesystem → album id/count map)
//! 2. Route resolution  fragment  →  Route        (URL fragment → view state)
//! ```
//!
//! The two components share no runtime state. The manifest is built once per
//! invocation and loaded by the consuming view at session start; the router
//! resolves every observed fragment into exactly one of three view states and
//! drives pagination over the flat work list derived from the manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Numeric filename convention parser shared by album and image discovery |
//! | [`route`] | `Route` values, the ordered fragment-dispatch rules, and page clamping |
//! | [`router`] | Process-wide fragment cell with subscribe/notify and navigation commands |
//! | [`scan`] | Walks the photos directory, fans out per album, produces the manifest |
//! | [`manifest`] | Manifest and work-list types serialized between builder and view |
//! | [`config`] | Optional `config.toml` loading, validation, and parallelism settings |
//! | [`output`] | CLI output formatting: information-first display of scan results |
//!
//! # Design Decisions
//!
//! ## Ordered Route Rules, Not Pattern Soup
//!
//! Fragment dispatch is an explicit ordered rule table evaluated top to
//! bottom: detail beats gallery beats home. Every input string resolves to
//! exactly one route; malformed page numbers coerce to `1`. No fragment is
//! ever an error, so the view layer never sees a failure from routing.
//!
//! ## Sort Once, Not Incrementally
//!
//! Album directories are scanned in parallel as fully independent units of
//! work. Results fan in to a plain vector and are sorted by numeric album id
//! in a single pass at the end. Concurrent workers never maintain ordering
//! invariants mid-flight.
//!
//! ## One Artifact, Written Last
//!
//! `works.json` is the sole contract between the builder and the site. It is
//! written only after a fully successful scan, so a failed build leaves any
//! previous manifest intact. Keys are string-encoded album ids in ascending
//! numeric order (`"2"` before `"10"`), values are image counts; `0` is a
//! real value and means an empty album.
//!
//! ## Fire-and-Forget Scroll
//!
//! Navigation with an anchor defers the scroll attempt by a short settle
//! delay so the target view can mount first. The delayed task is not
//! cancellable; a rapid navigation sequence may scroll toward an anchor that
//! is no longer relevant. That race is accepted and documented on
//! [`router::Router::navigate_with_scroll`].

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod route;
pub mod router;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
