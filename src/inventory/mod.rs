//! Branch inventory loading
//!
//! Provides a unified interface for fetching the known branches and pull
//! requests of a project, from the analysis server or from a JSON file.

mod file;
mod server;
mod wire;

pub use file::FileInventoryLoader;
pub use server::{
    PROJECT_BRANCHES_PATH, PROJECT_PULL_REQUESTS_PATH, ServerInventoryLoader,
};

use crate::error::Result;
use crate::types::{BranchInfo, BranchInventory, PullRequestInfo};
use async_trait::async_trait;
use tracing::debug;

/// Inventory loader trait
///
/// A "not found" answer is an empty listing, not an error. Every other
/// failure is fatal for the analysis run.
#[async_trait]
pub trait InventoryLoader: Send + Sync {
    /// Load the known branches of a project
    async fn load_branches(&self, project_key: &str) -> Result<Vec<BranchInfo>>;

    /// Load the known pull requests of a project
    async fn load_pull_requests(&self, project_key: &str) -> Result<Vec<PullRequestInfo>>;

    /// Load both listings into one inventory snapshot
    async fn load(&self, project_key: &str) -> Result<BranchInventory> {
        let branches = self.load_branches(project_key).await?;
        let pull_requests = self.load_pull_requests(project_key).await?;
        debug!(
            "Loaded {} branches and {} pull requests for {project_key}",
            branches.len(),
            pull_requests.len()
        );
        Ok(BranchInventory::new(branches, pull_requests))
    }
}
