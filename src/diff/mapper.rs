//! Line reconciliation across a chain of diffs
//!
//! Replays a chronological series of unified diffs and maps a line of the
//! newest revision back to the line it came from in the base revision.
//!
//! Two sorted sets are kept in the coordinates of the revision produced so
//! far: lines introduced since the base revision, and the positions where
//! base lines were deleted (a deletion is recorded at the position of the
//! line that slid into its place). Every insertion or deletion renumbers the
//! entries behind it, so both sets stay valid as the next diff is replayed.

use crate::diff::parse::{LineKind, parse_unified_diff};
use tracing::{debug, trace};

/// Sorted multiset of line numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LineSet(Vec<usize>);

impl LineSet {
    fn contains(&self, line: usize) -> bool {
        self.0.binary_search(&line).is_ok()
    }

    fn insert(&mut self, line: usize) {
        let idx = self.count_below(line);
        self.0.insert(idx, line);
    }

    fn remove(&mut self, line: usize) -> bool {
        match self.0.binary_search(&line) {
            Ok(idx) => {
                self.0.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Move every entry at or after `line` one line down the file
    fn shift_up_from(&mut self, line: usize) {
        let idx = self.count_below(line);
        for entry in &mut self.0[idx..] {
            *entry += 1;
        }
    }

    /// Move every entry after `line` one line up the file
    fn shift_down_after(&mut self, line: usize) {
        let idx = self.count_at_or_below(line);
        for entry in &mut self.0[idx..] {
            *entry -= 1;
        }
    }

    fn count_below(&self, line: usize) -> usize {
        self.0.partition_point(|&l| l < line)
    }

    fn count_at_or_below(&self, line: usize) -> usize {
        self.0.partition_point(|&l| l <= line)
    }
}

/// Correspondence between the newest revision and the base revision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMapping {
    added: LineSet,
    removed: LineSet,
}

impl LineMapping {
    /// Replay diffs, oldest first
    ///
    /// Diff text without any hunk header leaves the mapping untouched.
    pub fn replay<S: AsRef<str>>(diffs: &[S]) -> Self {
        let mut mapping = Self::default();
        for (idx, diff) in diffs.iter().enumerate() {
            let hunks = parse_unified_diff(diff.as_ref());
            if hunks.is_empty() {
                debug!("Diff #{idx} has no hunks, skipping");
                continue;
            }
            for hunk in &hunks {
                let mut point = hunk.first_new_line();
                for line in &hunk.lines {
                    match line.kind {
                        LineKind::Context => point += 1,
                        LineKind::Added => {
                            mapping.insert_line(point);
                            point += 1;
                        }
                        LineKind::Removed => mapping.remove_line(point),
                    }
                }
            }
            trace!(
                "After diff #{idx}: added {:?}, removed {:?}",
                mapping.added.0,
                mapping.removed.0
            );
        }
        mapping
    }

    fn insert_line(&mut self, point: usize) {
        self.added.shift_up_from(point);
        self.removed.shift_up_from(point);
        self.added.insert(point);
    }

    fn remove_line(&mut self, point: usize) {
        // Removing a line introduced by an earlier diff cancels it out
        let was_added = self.added.remove(point);
        self.added.shift_down_after(point);
        self.removed.shift_down_after(point);
        if !was_added {
            self.removed.insert(point);
        }
    }

    /// Base-revision line of a newest-revision line
    ///
    /// `None` when the line was introduced after the base revision (line 0
    /// never exists).
    pub fn base_line(&self, line: usize) -> Option<usize> {
        if line == 0 || self.added.contains(line) {
            return None;
        }
        Some(line - self.added.count_below(line) + self.removed.count_at_or_below(line))
    }

    /// Newest-revision lines without an ancestor, ascending
    pub fn added_lines(&self) -> &[usize] {
        &self.added.0
    }

    /// Newest-revision positions where base lines were deleted, ascending
    pub fn removed_lines(&self) -> &[usize] {
        &self.removed.0
    }

    /// Whether the diffs changed nothing
    pub fn is_identity(&self) -> bool {
        self.added.0.is_empty() && self.removed.0.is_empty()
    }
}

/// Base-revision line of `line` after replaying `diffs` (oldest first)
pub fn base_line<S: AsRef<str>>(diffs: &[S], line: usize) -> Option<usize> {
    LineMapping::replay(diffs).base_line(line)
}
