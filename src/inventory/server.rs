//! Inventory loading from the analysis server

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::inventory::InventoryLoader;
use crate::inventory::wire::{BranchesResponse, PullRequestsResponse, into_pull_requests};
use crate::types::{BranchInfo, PullRequestInfo};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Branch listing endpoint
pub const PROJECT_BRANCHES_PATH: &str = "/api/project_branches/list";
/// Pull request listing endpoint
pub const PROJECT_PULL_REQUESTS_PATH: &str = "/api/project_pull_requests/list";

const LOAD_BRANCHES: &str = "Could not load branches from server";
const LOAD_PULL_REQUESTS: &str = "Could not load pull requests from server";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Inventory loader using reqwest
pub struct ServerInventoryLoader {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ServerInventoryLoader {
    /// Create a loader for the configured server
    pub fn new(config: &ServerConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.host_url.as_str().trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn endpoint(&self, path: &str, project_key: &str) -> String {
        format!(
            "{}{path}?project={}",
            self.base_url,
            urlencoding::encode(project_key)
        )
    }

    /// GET a listing; `None` when the server answers 404
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        operation: &'static str,
    ) -> Result<Option<T>> {
        let fail = |reason: String| Error::InventoryLoad { operation, reason };

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.basic_auth(token, None::<&str>);
        }

        let response = request.send().await.map_err(|e| fail(e.to_string()))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{url} answered 404, treating as empty");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(fail(format!("server answered {status}")));
        }

        let body = response.text().await.map_err(|e| fail(e.to_string()))?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| fail(format!("invalid response: {e}")))
    }
}

#[async_trait]
impl InventoryLoader for ServerInventoryLoader {
    async fn load_branches(&self, project_key: &str) -> Result<Vec<BranchInfo>> {
        let url = self.endpoint(PROJECT_BRANCHES_PATH, project_key);
        let response: Option<BranchesResponse> = self.fetch(&url, LOAD_BRANCHES).await?;

        Ok(response
            .unwrap_or_default()
            .branches
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn load_pull_requests(&self, project_key: &str) -> Result<Vec<PullRequestInfo>> {
        let url = self.endpoint(PROJECT_PULL_REQUESTS_PATH, project_key);
        let response: Option<PullRequestsResponse> = self.fetch(&url, LOAD_PULL_REQUESTS).await?;

        into_pull_requests(response.unwrap_or_default().pull_requests).map_err(|e| {
            Error::InventoryLoad {
                operation: LOAD_PULL_REQUESTS,
                reason: e.to_string(),
            }
        })
    }
}
