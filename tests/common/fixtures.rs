//! Test data factories for branchline types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use branchline::settings::Settings;
use branchline::types::{BranchInfo, BranchInventory, BranchType, PullRequestInfo};

/// Create a non-main branch of type `BRANCH`
pub fn make_branch(name: &str) -> BranchInfo {
    BranchInfo {
        name: name.to_string(),
        branch_type: BranchType::Branch,
        is_main: false,
        merge_branch_uuid: None,
    }
}

/// Create a branch that merges into the branch with the given uuid
pub fn make_branch_merging_into(name: &str, merge_branch_uuid: &str) -> BranchInfo {
    BranchInfo {
        merge_branch_uuid: Some(merge_branch_uuid.to_string()),
        ..make_branch(name)
    }
}

/// Create the project's main branch
pub fn make_main_branch(name: &str) -> BranchInfo {
    BranchInfo {
        name: name.to_string(),
        branch_type: BranchType::Branch,
        is_main: true,
        merge_branch_uuid: None,
    }
}

/// Create a pull request
pub fn make_pull_request(key: &str, branch: &str, base: &str) -> PullRequestInfo {
    PullRequestInfo {
        key: key.to_string(),
        branch: branch.to_string(),
        base: base.to_string(),
        analysis_date_millis: 1_700_000_000_000,
    }
}

/// Inventory with main branch `develop`, a feature branch and one pull request
pub fn make_inventory() -> BranchInventory {
    BranchInventory::new(
        vec![
            make_main_branch("develop"),
            make_branch_merging_into("release-1.x", "uuid-develop"),
            make_branch("feature/login"),
        ],
        vec![make_pull_request("42", "feature/login", "develop")],
    )
}

/// Settings from literal pairs
pub fn make_settings(pairs: &[(&str, &str)]) -> Settings {
    pairs.iter().copied().collect()
}
