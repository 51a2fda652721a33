//! Centralized filename parsing for the numeric naming convention.
//!
//! Both discovery passes read the same convention: an album is a directory
//! whose name is entirely digits, and an image is a file named by a digit run
//! with a `.jpg`/`.jpeg` extension. This module is the single place those
//! rules live; [`crate::scan`] never inspects names directly.
//!
//! ## Accepted Forms
//!
//! Surrounding whitespace is tolerated in both positions. Digit runs keep
//! their numeric value, so `03` and `3` name the same image slot:
//! - `"7"`, `" 7 "` → album 7
//! - `"1.jpg"`, `"01.JPG"`, `"1 .jpeg"` → image 1
//! - `"cover.png"`, `"5.jpg.bak"`, `"notanumber"` → skipped

/// Parse an album directory name: entirely digits after trimming whitespace.
///
/// - `"3"` → `Some(3)`
/// - `" 12 "` → `Some(12)`
/// - `"007"` → `Some(7)`
/// - `"notanumber"`, `"3a"`, `""` → `None`
///
/// Names whose numeric value overflows `u32` are treated as non-numeric.
pub fn parse_album_id(name: &str) -> Option<u32> {
    parse_digit_run(name.trim())
}

/// Parse an image filename: digit run, then a `.jpg` or `.jpeg` extension,
/// case-insensitive. Whitespace around the digit run is tolerated.
///
/// - `"1.jpg"` → `Some(1)`
/// - `"2.JPG"` → `Some(2)`
/// - `"03.jpeg"` → `Some(3)`
/// - `" 4 .jpg"` → `Some(4)`
/// - `"cover.png"`, `"5.jpg.bak"`, `".jpg"` → `None`
pub fn parse_image_index(filename: &str) -> Option<u32> {
    let dot = filename.rfind('.')?;
    let (stem, ext) = filename.split_at(dot);
    let ext = &ext[1..];
    if !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg") {
        return None;
    }
    parse_digit_run(stem.trim())
}

/// One or more ASCII digits and nothing else.
fn parse_digit_run(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_id_plain_number() {
        assert_eq!(parse_album_id("3"), Some(3));
    }

    #[test]
    fn album_id_trims_whitespace() {
        assert_eq!(parse_album_id(" 12 "), Some(12));
    }

    #[test]
    fn album_id_leading_zeros() {
        assert_eq!(parse_album_id("007"), Some(7));
    }

    #[test]
    fn album_id_rejects_non_numeric() {
        assert_eq!(parse_album_id("notanumber"), None);
        assert_eq!(parse_album_id("3a"), None);
        assert_eq!(parse_album_id("a3"), None);
        assert_eq!(parse_album_id(""), None);
        assert_eq!(parse_album_id("  "), None);
    }

    #[test]
    fn album_id_rejects_overflow() {
        assert_eq!(parse_album_id("99999999999999999999"), None);
    }

    #[test]
    fn image_index_lowercase_jpg() {
        assert_eq!(parse_image_index("1.jpg"), Some(1));
    }

    #[test]
    fn image_index_uppercase_extension() {
        assert_eq!(parse_image_index("2.JPG"), Some(2));
        assert_eq!(parse_image_index("4.Jpeg"), Some(4));
    }

    #[test]
    fn image_index_leading_zeros() {
        assert_eq!(parse_image_index("03.jpeg"), Some(3));
    }

    #[test]
    fn image_index_whitespace_before_dot() {
        assert_eq!(parse_image_index("1 .jpg"), Some(1));
        assert_eq!(parse_image_index(" 4 .jpg"), Some(4));
    }

    #[test]
    fn image_index_rejects_other_extensions() {
        assert_eq!(parse_image_index("cover.png"), None);
        assert_eq!(parse_image_index("1.webp"), None);
    }

    #[test]
    fn image_index_rejects_trailing_suffix() {
        // The extension must be the final component: `.bak` wins rfind.
        assert_eq!(parse_image_index("5.jpg.bak"), None);
    }

    #[test]
    fn image_index_rejects_non_numeric_stem() {
        assert_eq!(parse_image_index("dawn.jpg"), None);
        assert_eq!(parse_image_index("1a.jpg"), None);
        assert_eq!(parse_image_index(".jpg"), None);
    }

    #[test]
    fn image_index_rejects_dotted_stem() {
        assert_eq!(parse_image_index("1.2.jpg"), None);
    }

    #[test]
    fn image_index_rejects_bare_name() {
        assert_eq!(parse_image_index("1"), None);
    }
}
