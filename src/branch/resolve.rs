//! Branch configuration resolution
//!
//! Decides from local settings and the server inventory which kind of
//! revision is analyzed. Branch settings win over pull request settings.

use crate::branch::BranchConfiguration;
use crate::settings::{
    BRANCH_NAME, BRANCH_PARAMETERS, PULL_REQUEST_BASE, PULL_REQUEST_BRANCH, PULL_REQUEST_KEY,
    PULL_REQUEST_PARAMETERS, Settings,
};
use crate::types::{BranchInventory, BranchType};
use tracing::debug;

/// Resolve the branch configuration of an analysis run
pub fn resolve(settings: &Settings, inventory: &BranchInventory) -> BranchConfiguration {
    if settings.contains_any(BRANCH_PARAMETERS) {
        let name = settings.get(BRANCH_NAME).unwrap_or_default();
        return branch_configuration(name, inventory);
    }

    if settings.contains_any(PULL_REQUEST_PARAMETERS) {
        return pull_request_configuration(settings, inventory);
    }

    let name = inventory.default_branch_name().to_string();
    debug!("No branch parameters, analyzing default branch {name}");
    BranchConfiguration::Default { name }
}

fn branch_configuration(name: &str, inventory: &BranchInventory) -> BranchConfiguration {
    match inventory.get(name) {
        Some(existing) => {
            debug!(
                "Branch {name} is known as {}, comparing against itself",
                existing.branch_type
            );
            BranchConfiguration::Branch {
                branch_type: existing.branch_type,
                name: name.to_string(),
                reference_branch_name: existing.name.clone(),
            }
        }
        None => {
            let reference = inventory.default_branch_name();
            debug!("Branch {name} is new, comparing against {reference}");
            BranchConfiguration::Branch {
                branch_type: BranchType::Branch,
                name: name.to_string(),
                reference_branch_name: reference.to_string(),
            }
        }
    }
}

fn pull_request_configuration(
    settings: &Settings,
    inventory: &BranchInventory,
) -> BranchConfiguration {
    let key = settings.get_trimmed(PULL_REQUEST_KEY).map(ToString::to_string);
    let name = settings
        .get_trimmed(PULL_REQUEST_BRANCH)
        .map(ToString::to_string);
    let default_branch = inventory.default_branch_name();

    let (reference_branch_name, target_branch_name) =
        match settings.get_trimmed(PULL_REQUEST_BASE) {
            None => (default_branch.to_string(), default_branch.to_string()),
            Some(base) => {
                let reference = if inventory.has_branch(base) {
                    base
                } else {
                    default_branch
                };
                (reference.to_string(), base.to_string())
            }
        };

    debug!(
        "Pull request {} targets {target_branch_name}, reference {reference_branch_name}",
        key.as_deref().unwrap_or("<no key>")
    );

    BranchConfiguration::PullRequest {
        key,
        name,
        reference_branch_name,
        target_branch_name,
    }
}
