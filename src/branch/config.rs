//! Resolved branch configuration of an analysis run

use crate::error::{Error, Result};
use crate::types::BranchType;
use serde::Serialize;

/// What kind of revision is analyzed and what it is compared against
///
/// Each variant carries exactly the fields that are meaningful for it, so a
/// pull request key can only exist on [`BranchConfiguration::PullRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BranchConfiguration {
    /// No branch or pull request settings: the main line is analyzed
    Default {
        /// Name of the project's main branch
        name: String,
    },
    /// Branch mode
    Branch {
        /// Type of the branch (taken from the inventory when known)
        branch_type: BranchType,
        /// Branch name as given in the settings
        name: String,
        /// Branch used as reference for new code
        reference_branch_name: String,
    },
    /// Pull request mode
    PullRequest {
        /// Pull request key, absent when not supplied
        key: Option<String>,
        /// Source branch of the pull request, absent when not supplied
        name: Option<String>,
        /// Branch used as reference for new code
        reference_branch_name: String,
        /// Branch the pull request merges into
        target_branch_name: String,
    },
}

impl BranchConfiguration {
    /// Type of the analyzed revision
    pub const fn branch_type(&self) -> BranchType {
        match self {
            Self::Default { .. } => BranchType::Main,
            Self::Branch { branch_type, .. } => *branch_type,
            Self::PullRequest { .. } => BranchType::PullRequest,
        }
    }

    /// Branch name, or the pull request's source branch
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Default { name } | Self::Branch { name, .. } => Some(name),
            Self::PullRequest { name, .. } => name.as_deref(),
        }
    }

    /// Reference branch for new code; absent on the default configuration
    pub fn reference_branch_name(&self) -> Option<&str> {
        match self {
            Self::Default { .. } => None,
            Self::Branch {
                reference_branch_name,
                ..
            }
            | Self::PullRequest {
                reference_branch_name,
                ..
            } => Some(reference_branch_name),
        }
    }

    /// Branch the changes merge into; only pull requests have one
    pub fn target_branch_name(&self) -> Option<&str> {
        match self {
            Self::PullRequest {
                target_branch_name, ..
            } => Some(target_branch_name),
            _ => None,
        }
    }

    /// Pull request key
    ///
    /// Fails on configurations that are not pull requests. A pull request
    /// configuration without a key yields `Ok(None)`.
    pub fn pull_request_key(&self) -> Result<Option<&str>> {
        match self {
            Self::PullRequest { key, .. } => Ok(key.as_deref()),
            _ => Err(Error::IllegalState(
                "Only a branch of type PULL_REQUEST can have a pull request key.".to_string(),
            )),
        }
    }

    /// Whether this is the default (main line) configuration
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default { .. })
    }

    /// Whether a pull request is analyzed
    pub const fn is_pull_request(&self) -> bool {
        matches!(self, Self::PullRequest { .. })
    }
}
