//! Branch identity used by downstream reporting
//!
//! Wraps a resolved configuration and derives component keys from it.

use crate::branch::BranchConfiguration;
use crate::error::{Error, Result};
use crate::types::{BranchInventory, BranchType};

/// Separator between a component key and its branch qualifier
const BRANCH_KEY_SEPARATOR: &str = ":BRANCH:";
/// Separator between a component key and its pull request qualifier
const PULL_REQUEST_SEPARATOR: &str = ":PULL_REQUEST:";

const NOT_A_PULL_REQUEST: &str = "Only a branch of type PULL_REQUEST can have a pull request key.";
const MISSING_PULL_REQUEST_KEY: &str = "A branch of type PULL_REQUEST must have a pull request key.";

/// The branch an analysis report belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    branch_type: BranchType,
    is_main: bool,
    name: String,
    merge_branch_uuid: Option<String>,
    target_branch_name: Option<String>,
    pull_request_key: Option<String>,
}

impl Branch {
    /// Create a branch without merge target or pull request key
    pub fn new(branch_type: BranchType, is_main: bool, name: impl Into<String>) -> Self {
        Self {
            branch_type,
            is_main,
            name: name.into(),
            merge_branch_uuid: None,
            target_branch_name: None,
            pull_request_key: None,
        }
    }

    /// Set the uuid of the branch this one merges into
    #[must_use]
    pub fn with_merge_branch_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.merge_branch_uuid = Some(uuid.into());
        self
    }

    /// Set the target branch name
    #[must_use]
    pub fn with_target_branch_name(mut self, name: impl Into<String>) -> Self {
        self.target_branch_name = Some(name.into());
        self
    }

    /// Set the pull request key
    #[must_use]
    pub fn with_pull_request_key(mut self, key: impl Into<String>) -> Self {
        self.pull_request_key = Some(key.into());
        self
    }

    /// Build the branch of a resolved configuration
    ///
    /// Main-ness and the merge target come from the inventory entry named
    /// like the analyzed branch. The inventory carries no uuid of a branch
    /// itself, so a pull request only knows its target by name.
    pub fn from_configuration(config: &BranchConfiguration, inventory: &BranchInventory) -> Self {
        match config {
            BranchConfiguration::Default { name } => {
                Self::new(BranchType::Main, true, name.clone())
            }
            BranchConfiguration::Branch {
                branch_type, name, ..
            } => {
                let existing = inventory.get(name);
                Self {
                    branch_type: *branch_type,
                    is_main: existing.is_some_and(|b| b.is_main),
                    name: name.clone(),
                    merge_branch_uuid: existing.and_then(|b| b.merge_branch_uuid.clone()),
                    target_branch_name: None,
                    pull_request_key: None,
                }
            }
            BranchConfiguration::PullRequest {
                key,
                name,
                target_branch_name,
                ..
            } => Self {
                branch_type: BranchType::PullRequest,
                is_main: false,
                name: name.clone().unwrap_or_default(),
                merge_branch_uuid: None,
                target_branch_name: Some(target_branch_name.clone()),
                pull_request_key: key.clone(),
            },
        }
    }

    /// Branch type
    pub const fn branch_type(&self) -> BranchType {
        self.branch_type
    }

    /// Branch name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the project's main branch
    pub const fn is_main(&self) -> bool {
        self.is_main
    }

    /// Cross-project duplication detection only runs on the main branch
    pub const fn supports_cross_project_cpd(&self) -> bool {
        self.is_main
    }

    /// Target branch name, if any
    pub fn target_branch_name(&self) -> Option<&str> {
        self.target_branch_name.as_deref()
    }

    /// Uuid of the branch this one merges into
    pub fn merge_branch_uuid(&self) -> Result<Option<&str>> {
        if self.is_main {
            return Err(Error::IllegalState("Invalid for main branch".to_string()));
        }
        Ok(self.merge_branch_uuid.as_deref())
    }

    /// Pull request key
    pub fn pull_request_key(&self) -> Result<Option<&str>> {
        if self.branch_type != BranchType::PullRequest {
            return Err(Error::IllegalState(NOT_A_PULL_REQUEST.to_string()));
        }
        Ok(self.pull_request_key.as_deref())
    }

    /// Component key of a project, or of a file/directory inside it
    ///
    /// The main branch uses the plain key. Pull requests and other branches
    /// get a qualifier so their components never collide with the main
    /// branch's.
    pub fn generate_key(&self, project_key: &str, file_path: Option<&str>) -> Result<String> {
        let effective_key = match file_path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => format!("{project_key}:{path}"),
            None => project_key.to_string(),
        };

        if self.is_main {
            return Ok(effective_key);
        }

        if self.branch_type == BranchType::PullRequest {
            let key = self
                .pull_request_key
                .as_deref()
                .ok_or_else(|| Error::IllegalState(MISSING_PULL_REQUEST_KEY.to_string()))?;
            return Ok(format!("{effective_key}{PULL_REQUEST_SEPARATOR}{key}"));
        }

        Ok(format!("{effective_key}{BRANCH_KEY_SEPARATOR}{}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BranchInfo;

    #[test]
    fn test_main_branch_key_is_plain() {
        let branch = Branch::new(BranchType::Branch, true, "main");
        assert_eq!(branch.generate_key("proj", None).unwrap(), "proj");
        assert_eq!(
            branch.generate_key("proj", Some("src/lib.rs")).unwrap(),
            "proj:src/lib.rs"
        );
    }

    #[test]
    fn test_blank_path_is_ignored() {
        let branch = Branch::new(BranchType::Branch, true, "main");
        assert_eq!(branch.generate_key("proj", Some("  ")).unwrap(), "proj");
    }

    #[test]
    fn test_branch_key_is_qualified() {
        let branch = Branch::new(BranchType::Branch, false, "feature/x");
        assert_eq!(
            branch.generate_key("proj", Some("a.rs")).unwrap(),
            "proj:a.rs:BRANCH:feature/x"
        );
    }

    #[test]
    fn test_pull_request_key_is_qualified() {
        let branch =
            Branch::new(BranchType::PullRequest, false, "feature/x").with_pull_request_key("42");
        assert_eq!(
            branch.generate_key("proj", None).unwrap(),
            "proj:PULL_REQUEST:42"
        );
        assert_eq!(branch.pull_request_key().unwrap(), Some("42"));
    }

    #[test]
    fn test_pull_request_without_key_fails() {
        let branch = Branch::new(BranchType::PullRequest, false, "feature/x");
        let err = branch.generate_key("proj", None).unwrap_err();
        assert!(matches!(err, Error::IllegalState(_)));
        assert_eq!(
            err.to_string(),
            "illegal state: A branch of type PULL_REQUEST must have a pull request key."
        );
    }

    #[test]
    fn test_pull_request_messages_match_configuration() {
        let branch = Branch::new(BranchType::Branch, false, "f");
        let config = BranchConfiguration::Default {
            name: "main".to_string(),
        };
        assert_eq!(
            branch.pull_request_key().unwrap_err().to_string(),
            config.pull_request_key().unwrap_err().to_string()
        );
    }

    #[test]
    fn test_accessor_misuse() {
        let main = Branch::new(BranchType::Branch, true, "main");
        assert!(main.merge_branch_uuid().is_err());
        assert!(main.pull_request_key().is_err());
        assert!(main.supports_cross_project_cpd());

        let feature = Branch::new(BranchType::Branch, false, "f").with_merge_branch_uuid("u1");
        assert_eq!(feature.merge_branch_uuid().unwrap(), Some("u1"));
        assert!(!feature.supports_cross_project_cpd());
    }

    #[test]
    fn test_from_configuration() {
        let inventory = BranchInventory::new(
            vec![
                BranchInfo {
                    name: "main".to_string(),
                    branch_type: BranchType::Branch,
                    is_main: true,
                    merge_branch_uuid: None,
                },
                BranchInfo {
                    name: "dev".to_string(),
                    branch_type: BranchType::Branch,
                    is_main: false,
                    merge_branch_uuid: Some("uuid-main".to_string()),
                },
            ],
            vec![],
        );

        let dev = Branch::from_configuration(
            &BranchConfiguration::Branch {
                branch_type: BranchType::Branch,
                name: "dev".to_string(),
                reference_branch_name: "dev".to_string(),
            },
            &inventory,
        );
        assert!(!dev.is_main());
        assert_eq!(dev.merge_branch_uuid().unwrap(), Some("uuid-main"));

        let main = Branch::from_configuration(
            &BranchConfiguration::Branch {
                branch_type: BranchType::Branch,
                name: "main".to_string(),
                reference_branch_name: "main".to_string(),
            },
            &inventory,
        );
        assert!(main.is_main());

        let pr = Branch::from_configuration(
            &BranchConfiguration::PullRequest {
                key: Some("3".to_string()),
                name: Some("fix".to_string()),
                reference_branch_name: "dev".to_string(),
                target_branch_name: "dev".to_string(),
            },
            &inventory,
        );
        assert_eq!(pr.branch_type(), BranchType::PullRequest);
        assert_eq!(pr.name(), "fix");
        assert_eq!(pr.target_branch_name(), Some("dev"));
        // dev's own merge target is main, which is not where the pull request merges
        assert_eq!(pr.merge_branch_uuid().unwrap(), None);
        assert_eq!(pr.generate_key("p", None).unwrap(), "p:PULL_REQUEST:3");
    }
}
