//! Fragment resolution and pagination arithmetic.
//!
//! A URL fragment is whatever follows the `#` in the address bar. The site
//! has exactly three view states, and every fragment string maps to exactly
//! one of them:
//!
//! ```text
//! "/p/7"        → Detail { page: 7 }
//! "/work"       → Gallery
//! "" (or other) → Home
//! ```
//!
//! Resolution is total. There is no parse error: a detail fragment with a
//! missing, malformed, or zero page number resolves to page 1, and anything
//! unrecognized falls through to `Home`. The view layer never handles a
//! routing failure.
//!
//! ## Rule Precedence
//!
//! Dispatch is an ordered list of rules evaluated top to bottom, first match
//! wins. The canonical precedence is detail > gallery > home. `/work` is a
//! prefix match, so `/work/extra` is still the gallery; the home rule is the
//! unconditional fallback and is not in the table.

/// A resolved view state.
///
/// `Detail::page` is always `>= 1`; the resolver and the clamp helpers are
/// the only constructors of page numbers in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the hero, about, profile, and contact sections.
    Home,
    /// The work gallery grid.
    Gallery,
    /// A single work shown full-size, with prev/next paging.
    Detail { page: u32 },
}

/// Fragment written when navigating home.
pub const HOME_FRAGMENT: &str = "/home";
/// Prefix marking a gallery fragment.
pub const GALLERY_MARKER: &str = "/work";
/// Prefix marking a detail fragment; the page number follows it.
pub const DETAIL_MARKER: &str = "/p/";

impl Route {
    /// Encode this route as the fragment `navigate_to` writes.
    ///
    /// `resolve` inverts this encoding: `resolve(&r.fragment()) == r` for
    /// every route with a valid page number.
    pub fn fragment(&self) -> String {
        match self {
            Route::Home => HOME_FRAGMENT.to_string(),
            Route::Gallery => GALLERY_MARKER.to_string(),
            Route::Detail { page } => format!("{DETAIL_MARKER}{page}"),
        }
    }
}

/// One dispatch rule: returns the route if the fragment matches its marker.
type RouteRule = fn(&str) -> Option<Route>;

/// Ordered dispatch table. First match wins: detail before gallery.
/// Unmatched fragments fall through to [`Route::Home`].
const ROUTE_RULES: &[RouteRule] = &[detail_rule, gallery_rule];

/// Resolve a fragment string to its view state.
///
/// Total over all inputs. A leading `#` is stripped first, so the raw value
/// of `location.hash` and the bare fragment resolve identically.
pub fn resolve(fragment: &str) -> Route {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    ROUTE_RULES
        .iter()
        .find_map(|rule| rule(fragment))
        .unwrap_or(Route::Home)
}

/// `/p/<digits>` → Detail. The leading digit run after the marker is the
/// page; an empty run, unparseable value, or `0` defaults to page 1, and
/// anything after the digits is ignored.
fn detail_rule(fragment: &str) -> Option<Route> {
    let rest = fragment.strip_prefix(DETAIL_MARKER)?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let page = match rest[..end].parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    };
    Some(Route::Detail { page })
}

/// `/work` and anything under it → Gallery.
fn gallery_rule(fragment: &str) -> Option<Route> {
    fragment.starts_with(GALLERY_MARKER).then_some(Route::Gallery)
}

/// Clamp a candidate page number into `[1, total]`.
///
/// Takes `i64` so prev/next arithmetic can underflow freely; the result is
/// always a valid 1-based page. An empty work list is treated as one page so
/// the invariant `page >= 1` survives even with nothing to show.
pub fn clamp_page(page: i64, total: u32) -> u32 {
    page.clamp(1, i64::from(total.max(1))) as u32
}

/// Page reached by the prev control. Saturates at 1.
pub fn prev_page(page: u32, total: u32) -> u32 {
    clamp_page(i64::from(page) - 1, total)
}

/// Page reached by the next control. Saturates at `total`.
pub fn next_page(page: u32, total: u32) -> u32 {
    clamp_page(i64::from(page) + 1, total)
}

/// Whether the prev control is live. False on page 1.
pub fn has_prev(page: u32) -> bool {
    page > 1
}

/// Whether the next control is live. False on the last page.
pub fn has_next(page: u32, total: u32) -> bool {
    page < total
}

/// Zero-based index into the work list for a (possibly out-of-range) page.
pub fn work_index(page: u32, total: u32) -> usize {
    (clamp_page(i64::from(page), total) - 1) as usize
}
