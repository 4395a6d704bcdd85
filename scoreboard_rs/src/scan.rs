//! Marker counting over raw report text.
//!
//! Reports are never parsed as HTML; scores come from literal substring
//! counts only.

use crate::types::{PASS_MARKER, ROW_MARKER};

/// Count non-overlapping, case-sensitive occurrences of `needle` in `text`,
/// scanning left to right. An empty needle counts as zero.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

pub fn pass_count(text: &str) -> usize {
    count_occurrences(text, PASS_MARKER)
}

/// Row markers minus the header offset. Negative when the table has fewer
/// rows than the offset assumes.
pub fn data_rows(text: &str, header_row_count: i64) -> i64 {
    let raw = i64::try_from(count_occurrences(text, ROW_MARKER)).unwrap_or(i64::MAX);
    raw.saturating_sub(header_row_count)
}
