//! Analysis settings
//!
//! Local `key=value` properties that select branch or pull-request mode.
//! Settings come from a properties file and from command-line overrides.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the branch being analyzed
pub const BRANCH_NAME: &str = "sonar.branch.name";
/// Deprecated target branch override
pub const BRANCH_TARGET: &str = "sonar.branch.target";
/// Deprecated single-branch property, superseded by [`BRANCH_NAME`]
pub const LEGACY_BRANCH: &str = "sonar.branch";
/// Pull request identifier
pub const PULL_REQUEST_KEY: &str = "sonar.pullrequest.key";
/// Pull request source branch
pub const PULL_REQUEST_BRANCH: &str = "sonar.pullrequest.branch";
/// Pull request target branch
pub const PULL_REQUEST_BASE: &str = "sonar.pullrequest.base";

/// Keys selecting branch mode
pub const BRANCH_PARAMETERS: &[&str] = &[BRANCH_NAME];
/// Keys selecting pull-request mode
pub const PULL_REQUEST_PARAMETERS: &[&str] =
    &[PULL_REQUEST_KEY, PULL_REQUEST_BRANCH, PULL_REQUEST_BASE];

/// String-to-string analysis settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Trimmed value for a key; blank values are treated as absent
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the key is present, even with an empty value
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether any of the keys is present
    pub fn contains_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.contains_key(k))
    }

    /// Iterate over all settings in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a properties document
    ///
    /// One `key=value` (or `key: value`) per line. Blank lines and lines
    /// starting with `#` or `!` are skipped. Keys and values are trimmed.
    pub fn parse_properties(text: &str) -> Result<Self> {
        let mut settings = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                return Err(Error::Parse(format!(
                    "line {}: expected key=value, got {line:?}",
                    idx + 1
                )));
            };
            let key = line[..split].trim();
            if key.is_empty() {
                return Err(Error::Parse(format!("line {}: empty property key", idx + 1)));
            }
            settings.set(key, line[split + 1..].trim());
        }
        Ok(settings)
    }

    /// Load a properties file from disk
    pub fn from_properties_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_properties(&text)
    }

    /// Apply a single `key=value` override
    ///
    /// The value is kept verbatim so that explicitly blank values remain
    /// distinguishable from missing keys.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::Config(format!("expected key=value, got {assignment:?}")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Config(format!("empty key in {assignment:?}")));
        }
        self.set(key, value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        for (k, v) in iter {
            settings.set(k, v);
        }
        settings
    }
}
