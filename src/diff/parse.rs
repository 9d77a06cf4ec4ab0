//! Unified diff parsing
//!
//! Splits unified-diff text into hunks with tagged body lines. File headers
//! and anything before the first hunk header are ignored.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

/// Kind of a hunk body line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Unchanged line present in both revisions
    Context,
    /// Line only present in the new revision
    Added,
    /// Line only present in the old revision
    Removed,
}

/// A single body line of a hunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Line kind
    pub kind: LineKind,
    /// Line text without the leading marker
    pub content: String,
}

/// A hunk of a unified diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffHunk {
    /// First line of the range in the old revision
    pub old_start: usize,
    /// Number of old-revision lines covered
    pub old_count: usize,
    /// First line of the range in the new revision
    pub new_start: usize,
    /// Number of new-revision lines covered
    pub new_count: usize,
    /// Body lines
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// First new-revision line touched by the hunk body
    ///
    /// An empty new range (`+N,0`) names the line before the range, so the
    /// body starts right after it.
    pub const fn first_new_line(&self) -> usize {
        if self.new_count == 0 {
            self.new_start + 1
        } else {
            self.new_start
        }
    }

    /// Number of added lines
    pub fn added(&self) -> usize {
        self.count(LineKind::Added)
    }

    /// Number of removed lines
    pub fn removed(&self) -> usize {
        self.count(LineKind::Removed)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }

    /// Whether the body already covers both ranges announced by the header
    fn is_complete(&self) -> bool {
        let old_seen = self
            .lines
            .iter()
            .filter(|l| l.kind != LineKind::Added)
            .count();
        let new_seen = self
            .lines
            .iter()
            .filter(|l| l.kind != LineKind::Removed)
            .count();
        old_seen >= self.old_count && new_seen >= self.new_count
    }
}

fn hunk_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@")
            .expect("hardcoded hunk header pattern is valid")
    })
}

/// Parse a `@@ -a[,b] +c[,d] @@` header; omitted counts default to 1
///
/// Starts and counts must fit in a `u32`, and so must the end of each
/// range, which keeps every line position of a replay far from overflow.
pub fn parse_hunk_header(line: &str) -> Option<DiffHunk> {
    let caps = hunk_header_regex().captures(line)?;
    let number = |idx: usize, default: u32| -> Option<u32> {
        caps.get(idx)
            .map_or(Some(default), |m| m.as_str().parse().ok())
    };
    let range = |start_idx: usize, count_idx: usize| -> Option<(usize, usize)> {
        let start = number(start_idx, 0)?;
        let count = number(count_idx, 1)?;
        let fits = start
            .checked_add(count)
            .and_then(|end| end.checked_add(1))
            .is_some();
        fits.then_some((start as usize, count as usize))
    };

    let (old_start, old_count) = range(1, 2)?;
    let (new_start, new_count) = range(3, 4)?;
    Some(DiffHunk {
        old_start,
        old_count,
        new_start,
        new_count,
        lines: Vec::new(),
    })
}

fn is_file_header(line: &str) -> bool {
    line.starts_with("diff ")
        || line.starts_with("index ")
        || line.starts_with("--- ")
        || line.starts_with("+++ ")
}

/// Parse unified-diff text into hunks
///
/// Never fails: text without a valid hunk header yields no hunks, and a
/// malformed header drops the lines up to the next valid one.
pub fn parse_unified_diff(text: &str) -> Vec<DiffHunk> {
    let mut hunks = Vec::new();
    let mut current: Option<DiffHunk> = None;

    for raw in text.lines() {
        if raw.starts_with("@@") {
            hunks.extend(current.take());
            current = parse_hunk_header(raw);
            if current.is_none() {
                debug!("Skipping malformed hunk header: {raw}");
            }
            continue;
        }

        let Some(hunk) = current.as_mut() else {
            continue;
        };

        if is_file_header(raw) && hunk.is_complete() {
            hunks.extend(current.take());
            continue;
        }

        let (kind, content) = match raw.chars().next() {
            Some('+') => (LineKind::Added, &raw[1..]),
            Some('-') => (LineKind::Removed, &raw[1..]),
            Some(' ') => (LineKind::Context, &raw[1..]),
            // "\ No newline at end of file"
            Some('\\') => continue,
            // editors and mail clients strip the blank of empty context lines
            None => (LineKind::Context, ""),
            Some(_) => (LineKind::Context, raw),
        };

        hunk.lines.push(DiffLine {
            kind,
            content: content.to_string(),
        });
    }

    hunks.extend(current);
    hunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_with_counts() {
        let hunk = parse_hunk_header("@@ -10,4 +12,6 @@ fn main() {").unwrap();
        assert_eq!(
            (hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count),
            (10, 4, 12, 6)
        );
    }

    #[test]
    fn test_parse_header_default_counts() {
        let hunk = parse_hunk_header("@@ -3 +3 @@").unwrap();
        assert_eq!((hunk.old_count, hunk.new_count), (1, 1));
    }

    #[test]
    fn test_parse_header_rejects_garbage() {
        assert!(parse_hunk_header("@@ nonsense @@").is_none());
        assert!(parse_hunk_header("-1,2 +1,2").is_none());
    }

    #[test]
    fn test_parse_header_rejects_huge_ranges() {
        assert!(parse_hunk_header("@@ -1,1 +18446744073709551615,0 @@").is_none());
        assert!(parse_hunk_header("@@ -1 +18446744073709551615 @@").is_none());
        assert!(parse_hunk_header("@@ -1 +4294967295 @@").is_none());
        assert!(parse_hunk_header("@@ -4294967290,10 +1 @@").is_none());

        let hunk = parse_hunk_header("@@ -1 +4294967293,1 @@").unwrap();
        assert_eq!(hunk.first_new_line(), 4_294_967_293);
    }

    #[test]
    fn test_first_new_line_of_empty_range() {
        let hunk = parse_hunk_header("@@ -3,1 +2,0 @@").unwrap();
        assert_eq!(hunk.first_new_line(), 3);
        let hunk = parse_hunk_header("@@ -0,0 +1,2 @@").unwrap();
        assert_eq!(hunk.first_new_line(), 1);
    }

    #[test]
    fn test_parse_git_diff() {
        let text = "diff --git a/f.txt b/f.txt\n\
                    index 83db48f..bf269f4 100644\n\
                    --- a/f.txt\n\
                    +++ b/f.txt\n\
                    @@ -1,3 +1,3 @@\n \
                    one\n\
                    -two\n\
                    +2\n \
                    three\n\
                    @@ -10,2 +10,3 @@\n \
                    ten\n\
                    +ten and a half\n \
                    eleven\n\
                    \\ No newline at end of file\n";
        let hunks = parse_unified_diff(text);
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].lines.len(), 4);
        assert_eq!(hunks[0].added(), 1);
        assert_eq!(hunks[0].removed(), 1);
        assert_eq!(hunks[0].lines[1].content, "two");
        assert_eq!(hunks[1].lines.len(), 3);
        assert_eq!(hunks[1].lines[1].kind, LineKind::Added);
    }

    #[test]
    fn test_following_file_header_ends_hunk() {
        let text = "@@ -1,1 +1,1 @@\n\
                    -a\n\
                    +b\n\
                    diff --git a/g b/g\n\
                    --- a/g\n\
                    +++ b/g\n\
                    @@ -5,1 +5,0 @@\n\
                    -gone\n";
        let hunks = parse_unified_diff(text);
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[0].lines.len(), 2);
        assert_eq!(hunks[1].lines.len(), 1);
    }

    #[test]
    fn test_removed_line_looking_like_header_inside_hunk() {
        let text = "@@ -1,2 +1,1 @@\n\
                    --- not a header\n \
                    kept\n";
        let hunks = parse_unified_diff(text);
        assert_eq!(hunks[0].lines[0].kind, LineKind::Removed);
        assert_eq!(hunks[0].lines[0].content, "-- not a header");
    }

    #[test]
    fn test_text_without_header_has_no_hunks() {
        assert!(parse_unified_diff("").is_empty());
        assert!(parse_unified_diff("+added\n-removed\n context").is_empty());
    }

    #[test]
    fn test_empty_body_line_is_context() {
        let hunks = parse_unified_diff("@@ -1,3 +1,3 @@\n a\n\n c");
        assert_eq!(hunks[0].lines[1].kind, LineKind::Context);
    }
}
