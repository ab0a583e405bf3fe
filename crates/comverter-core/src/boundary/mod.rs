//! Comment boundaries: single anchored delimiter patterns and the free
//! matching functions that operate over lists of them.

pub mod matching;
pub mod types;

pub use matching::{
    find_all_matches, find_first_match, is_single_line_comment_marker, matches_any,
};
pub use types::Boundary;
