//! Inventory loading from a JSON document on disk
//!
//! The document combines both server listings:
//! `{"branches": [...], "pullRequests": [...]}`. A missing file is an empty
//! inventory, mirroring the server's 404 rule.

use crate::error::Result;
use crate::inventory::InventoryLoader;
use crate::inventory::wire::{InventoryDocument, into_pull_requests};
use crate::types::{BranchInfo, PullRequestInfo};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Inventory loader reading a JSON export
#[derive(Debug, Clone)]
pub struct FileInventoryLoader {
    path: PathBuf,
}

impl FileInventoryLoader {
    /// Create a loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the inventory document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<InventoryDocument> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, treating as empty", self.path.display());
                Ok(InventoryDocument::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl InventoryLoader for FileInventoryLoader {
    // The document is project-specific already, so the key is not consulted.
    async fn load_branches(&self, _project_key: &str) -> Result<Vec<BranchInfo>> {
        let document = self.read_document().await?;
        Ok(document.branches.into_iter().map(Into::into).collect())
    }

    async fn load_pull_requests(&self, _project_key: &str) -> Result<Vec<PullRequestInfo>> {
        let document = self.read_document().await?;
        into_pull_requests(document.pull_requests)
    }
}
