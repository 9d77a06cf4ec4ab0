//! Mock inventory loader for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use branchline::error::{Error, Result};
use branchline::inventory::InventoryLoader;
use branchline::types::{BranchInfo, BranchInventory, PullRequestInfo};
use std::sync::Mutex;

/// Hand-written mock `InventoryLoader`
///
/// Features:
/// - Canned branch and pull request listings
/// - Call tracking per project key
/// - Error injection for failure path testing
pub struct MockInventoryLoader {
    branches: Vec<BranchInfo>,
    pull_requests: Vec<PullRequestInfo>,
    // Call tracking
    load_branches_calls: Mutex<Vec<String>>,
    load_pull_requests_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_branches: Mutex<Option<String>>,
    error_on_pull_requests: Mutex<Option<String>>,
}

impl MockInventoryLoader {
    /// Create a mock serving the given inventory
    pub fn with_inventory(inventory: BranchInventory) -> Self {
        Self {
            branches: inventory.branches,
            pull_requests: inventory.pull_requests,
            load_branches_calls: Mutex::new(Vec::new()),
            load_pull_requests_calls: Mutex::new(Vec::new()),
            error_on_branches: Mutex::new(None),
            error_on_pull_requests: Mutex::new(None),
        }
    }

    /// Create a mock serving an empty inventory
    pub fn empty() -> Self {
        Self::with_inventory(BranchInventory::default())
    }

    // === Error injection methods ===

    /// Make `load_branches` fail
    pub fn fail_branches(&self, reason: &str) {
        *self.error_on_branches.lock().unwrap() = Some(reason.to_string());
    }

    /// Make `load_pull_requests` fail
    pub fn fail_pull_requests(&self, reason: &str) {
        *self.error_on_pull_requests.lock().unwrap() = Some(reason.to_string());
    }

    // === Call verification methods ===

    /// Project keys `load_branches` was called with
    pub fn get_load_branches_calls(&self) -> Vec<String> {
        self.load_branches_calls.lock().unwrap().clone()
    }

    /// Project keys `load_pull_requests` was called with
    pub fn get_load_pull_requests_calls(&self) -> Vec<String> {
        self.load_pull_requests_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryLoader for MockInventoryLoader {
    async fn load_branches(&self, project_key: &str) -> Result<Vec<BranchInfo>> {
        self.load_branches_calls
            .lock()
            .unwrap()
            .push(project_key.to_string());

        if let Some(reason) = self.error_on_branches.lock().unwrap().clone() {
            return Err(Error::InventoryLoad {
                operation: "Could not load branches from server",
                reason,
            });
        }
        Ok(self.branches.clone())
    }

    async fn load_pull_requests(&self, project_key: &str) -> Result<Vec<PullRequestInfo>> {
        self.load_pull_requests_calls
            .lock()
            .unwrap()
            .push(project_key.to_string());

        if let Some(reason) = self.error_on_pull_requests.lock().unwrap().clone() {
            return Err(Error::InventoryLoad {
                operation: "Could not load pull requests from server",
                reason,
            });
        }
        Ok(self.pull_requests.clone())
    }
}
