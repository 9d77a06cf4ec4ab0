//! Base-line command - map an edited line back through a chain of diffs

use anstream::println;
use branchline::diff::{LineMapping, parse_unified_diff};
use branchline::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Run the base-line command
///
/// Prints the line number in the base revision, or `new` when the line was
/// introduced by one of the diffs.
pub async fn run_base_line(diff_paths: &[PathBuf], line: usize) -> Result<()> {
    if line == 0 {
        return Err(Error::Config("line numbers start at 1".to_string()));
    }

    let mut diffs = Vec::with_capacity(diff_paths.len());
    for path in diff_paths {
        let text = tokio::fs::read_to_string(path).await?;
        for hunk in parse_unified_diff(&text) {
            debug!(
                "{}: hunk at +{} adds {}, removes {}",
                path.display(),
                hunk.new_start,
                hunk.added(),
                hunk.removed()
            );
        }
        diffs.push(text);
    }

    let mapping = LineMapping::replay(&diffs);
    debug!(
        "{} added, {} removed after replaying {} diffs",
        mapping.added_lines().len(),
        mapping.removed_lines().len(),
        diffs.len()
    );

    match mapping.base_line(line) {
        Some(base) => println!("{base}"),
        None => println!("new"),
    }
    Ok(())
}
