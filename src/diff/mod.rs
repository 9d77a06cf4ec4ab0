//! Unified diff handling
//!
//! Parsing of diff text and the line reconciliation built on it.

mod mapper;
mod parse;

pub use mapper::{LineMapping, base_line};
pub use parse::{DiffHunk, DiffLine, LineKind, parse_hunk_header, parse_unified_diff};
