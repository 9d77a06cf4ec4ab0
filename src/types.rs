//! Core types for branchline
//!
//! The branch/pull-request inventory as known by the analysis server.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch name used when the inventory has no main branch
pub const DEFAULT_MAIN_BRANCH_NAME: &str = "main";

/// Kind of revision being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchType {
    /// The project's main line
    Main,
    /// A long-lived or feature branch
    Branch,
    /// A pull request
    PullRequest,
}

impl BranchType {
    /// Wire name of the branch type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Branch => "BRANCH",
            Self::PullRequest => "PULL_REQUEST",
        }
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A branch known to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Branch name
    pub name: String,
    /// Branch type
    pub branch_type: BranchType,
    /// Whether this is the project's main branch
    pub is_main: bool,
    /// Uuid of the branch this one merges into (only meaningful when not main)
    pub merge_branch_uuid: Option<String>,
}

/// A pull request known to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// Pull request key
    pub key: String,
    /// Source branch name
    pub branch: String,
    /// Target branch name
    pub base: String,
    /// Date of the last analysis, epoch milliseconds
    pub analysis_date_millis: i64,
}

/// Snapshot of the branches and pull requests of one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchInventory {
    /// Known branches
    pub branches: Vec<BranchInfo>,
    /// Known pull requests
    pub pull_requests: Vec<PullRequestInfo>,
}

impl BranchInventory {
    /// Create an inventory from loaded branches and pull requests
    pub const fn new(branches: Vec<BranchInfo>, pull_requests: Vec<PullRequestInfo>) -> Self {
        Self {
            branches,
            pull_requests,
        }
    }

    /// Name of the main branch, falling back to [`DEFAULT_MAIN_BRANCH_NAME`]
    pub fn default_branch_name(&self) -> &str {
        self.branches
            .iter()
            .find(|b| b.is_main)
            .map_or(DEFAULT_MAIN_BRANCH_NAME, |b| b.name.as_str())
    }

    /// Look up a branch by name
    pub fn get(&self, name: &str) -> Option<&BranchInfo> {
        self.branches.iter().find(|b| b.name == name)
    }

    /// Whether a branch with this name is known
    pub fn has_branch(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a pull request by key
    pub fn pull_request(&self, key: &str) -> Option<&PullRequestInfo> {
        self.pull_requests.iter().find(|pr| pr.key == key)
    }

    /// Whether neither branches nor pull requests are known
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.pull_requests.is_empty()
    }
}
