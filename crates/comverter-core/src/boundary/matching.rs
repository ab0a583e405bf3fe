//! Matching utilities over arbitrary boundary lists.
//!
//! List order is the priority mechanism: `find_first_match` returns the
//! earliest boundary that matches, so lists must run from most specific
//! to least specific.

use super::types::Boundary;
use crate::defaults;

/// Check if any of the provided boundaries match the line.
pub fn matches_any(line: &str, boundaries: &[Boundary]) -> bool {
    boundaries.iter().any(|b| b.matches(line))
}

/// Returns the first boundary, in list order, that matches the line.
pub fn find_first_match<'b>(line: &str, boundaries: &'b [Boundary]) -> Option<&'b Boundary> {
    boundaries.iter().find(|b| b.matches(line))
}

/// Returns every boundary that matches the line, preserving list order.
pub fn find_all_matches<'b>(line: &str, boundaries: &'b [Boundary]) -> Vec<&'b Boundary> {
    boundaries.iter().filter(|b| b.matches(line)).collect()
}

/// Check if the line is any kind of single-line comment marker:
/// repeated forward slashes, `///` and `//!` doxygen markers, or repeated hashes.
pub fn is_single_line_comment_marker(line: &str) -> bool {
    matches_any(line, defaults::single_line_markers())
}
