//! Dotted-numeric version ordering
//!
//! Minecraft release identifiers are plain dotted numbers ("1.8.9", "1.20"),
//! so ordering compares each dot-separated segment as an integer, most
//! significant segment first. Lexicographic comparison would misplace
//! "1.10" before "1.2".

use std::cmp::Ordering;

/// Parse an identifier into its numeric segments.
///
/// Returns None when any segment is empty or non-numeric.
pub fn parse_segments(id: &str) -> Option<Vec<u64>> {
    id.split('.').map(|s| s.parse::<u64>().ok()).collect()
}

/// Compare two identifiers segment-wise. A shorter identifier orders before
/// a longer one when the shared segments are equal ("1.20" < "1.20.1").
/// Unparseable identifiers order below parseable ones and fall back to
/// string comparison among themselves.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (parse_segments(a), parse_segments(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Sort identifiers in descending numeric order, newest first.
pub fn sort_descending(ids: &mut [String]) {
    ids.sort_by(|a, b| compare_ids(b, a));
}
