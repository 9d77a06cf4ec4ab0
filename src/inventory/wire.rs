//! JSON shapes of the inventory listing endpoints

use crate::error::{Error, Result};
use crate::types::{BranchInfo, BranchType, PullRequestInfo};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BranchesResponse {
    #[serde(default)]
    pub branches: Vec<WsBranch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WsBranch {
    name: String,
    #[serde(rename = "type")]
    branch_type: BranchType,
    #[serde(default)]
    is_main: bool,
    #[serde(default)]
    merge_branch: Option<String>,
}

impl From<WsBranch> for BranchInfo {
    fn from(ws: WsBranch) -> Self {
        Self {
            name: ws.name,
            branch_type: ws.branch_type,
            is_main: ws.is_main,
            merge_branch_uuid: ws.merge_branch.filter(|_| !ws.is_main),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequestsResponse {
    #[serde(default)]
    pub pull_requests: Vec<WsPullRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WsPullRequest {
    key: String,
    #[serde(default)]
    branch: String,
    #[serde(default)]
    base: String,
    #[serde(default)]
    analysis_date: Option<AnalysisDate>,
}

/// The server sends ISO-8601 text; exports may carry epoch milliseconds
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnalysisDate {
    Millis(i64),
    Text(String),
}

impl AnalysisDate {
    fn to_millis(&self) -> Result<i64> {
        match self {
            Self::Millis(millis) => Ok(*millis),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .or_else(|_| DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z"))
                .map(|date| date.timestamp_millis())
                .map_err(|e| Error::Parse(format!("invalid analysis date {text:?}: {e}"))),
        }
    }
}

impl TryFrom<WsPullRequest> for PullRequestInfo {
    type Error = Error;

    fn try_from(ws: WsPullRequest) -> Result<Self> {
        let analysis_date_millis = match &ws.analysis_date {
            Some(date) => date.to_millis()?,
            None => 0,
        };
        Ok(Self {
            key: ws.key,
            branch: ws.branch,
            base: ws.base,
            analysis_date_millis,
        })
    }
}

/// Both listings in one document, read by `FileInventoryLoader`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryDocument {
    #[serde(default)]
    pub branches: Vec<WsBranch>,
    #[serde(default)]
    pub pull_requests: Vec<WsPullRequest>,
}

pub(crate) fn into_pull_requests(ws: Vec<WsPullRequest>) -> Result<Vec<PullRequestInfo>> {
    ws.into_iter().map(PullRequestInfo::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_listing() {
        let json = r#"{"branches":[
            {"name":"main","type":"BRANCH","isMain":true,"mergeBranch":"ignored"},
            {"name":"feature/x","type":"BRANCH","isMain":false,"mergeBranch":"uuid-1"},
            {"name":"legacy","type":"MAIN"}
        ]}"#;
        let response: BranchesResponse = serde_json::from_str(json).unwrap();
        let branches: Vec<BranchInfo> = response.branches.into_iter().map(Into::into).collect();
        assert_eq!(branches.len(), 3);
        assert!(branches[0].is_main);
        assert_eq!(branches[0].merge_branch_uuid, None);
        assert_eq!(branches[1].merge_branch_uuid.as_deref(), Some("uuid-1"));
        assert_eq!(branches[2].branch_type, BranchType::Main);
        assert!(!branches[2].is_main);
    }

    #[test]
    fn test_pull_request_dates() {
        let json = r#"{"pullRequests":[
            {"key":"1","branch":"a","base":"main","analysisDate":"2017-04-01T02:15:42+0200"},
            {"key":"2","branch":"b","base":"main","analysisDate":"2017-04-01T00:15:42Z"},
            {"key":"3","branch":"c","base":"main","analysisDate":1491005742000},
            {"key":"4","branch":"d","base":"main"}
        ]}"#;
        let response: PullRequestsResponse = serde_json::from_str(json).unwrap();
        let prs = into_pull_requests(response.pull_requests).unwrap();
        assert_eq!(prs[0].analysis_date_millis, 1_491_005_742_000);
        assert_eq!(prs[1].analysis_date_millis, 1_491_005_742_000);
        assert_eq!(prs[2].analysis_date_millis, 1_491_005_742_000);
        assert_eq!(prs[3].analysis_date_millis, 0);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{"pullRequests":[{"key":"1","analysisDate":"yesterday"}]}"#;
        let response: PullRequestsResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            into_pull_requests(response.pull_requests),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_listing_is_empty() {
        let response: PullRequestsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.pull_requests.is_empty());
    }
}
