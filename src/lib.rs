//! branchline - branch context and line reconciliation for analysis runs
//!
//! Resolves whether an analysis run looks at the main line, a branch or a
//! pull request, and maps issue lines of an edited revision back to a prior
//! revision by replaying the diffs between them.
//!
//! # Example
//!
//! ```
//! use branchline::branch::resolve;
//! use branchline::diff::base_line;
//! use branchline::settings::{Settings, BRANCH_NAME};
//! use branchline::types::{BranchType, BranchInventory};
//!
//! let mut settings = Settings::new();
//! settings.set(BRANCH_NAME, "feature/login");
//! let config = resolve(&settings, &BranchInventory::default());
//! assert_eq!(config.branch_type(), BranchType::Branch);
//! assert_eq!(config.reference_branch_name(), Some("main"));
//!
//! let diff = "@@ -1,2 +1,3 @@\n a\n+b\n c\n";
//! assert_eq!(base_line(&[diff], 2), None);
//! assert_eq!(base_line(&[diff], 3), Some(2));
//! ```

pub mod branch;
pub mod config;
pub mod diff;
pub mod error;
pub mod inventory;
pub mod settings;
pub mod types;
