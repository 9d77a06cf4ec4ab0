//! Validation of branch settings
//!
//! Problems are reported as human-readable messages appended to a
//! caller-owned list; nothing here fails.

use crate::settings::{BRANCH_NAME, BRANCH_TARGET, LEGACY_BRANCH, Settings};
use tracing::warn;

/// Maximum accepted length of a branch name, in characters
pub const MAX_BRANCH_NAME_LENGTH: usize = 255;

/// Check settings for illegal combinations and lengths
pub fn validate(messages: &mut Vec<String>, settings: &Settings) {
    let before = messages.len();
    let branch_name = non_empty(settings, BRANCH_NAME);
    let legacy = non_empty(settings, LEGACY_BRANCH);

    if legacy.is_some() {
        if branch_name.is_some() {
            messages.push(conflict_message(BRANCH_NAME));
        }
        if non_empty(settings, BRANCH_TARGET).is_some() {
            messages.push(conflict_message(BRANCH_TARGET));
        }
    }

    if let Some(name) = branch_name {
        if name.chars().count() > MAX_BRANCH_NAME_LENGTH {
            messages.push(format!(
                "'{name}' is not a valid branch name. Max length is {MAX_BRANCH_NAME_LENGTH} characters."
            ));
        }
    }

    for message in &messages[before..] {
        warn!("{message}");
    }
}

fn non_empty<'a>(settings: &'a Settings, key: &str) -> Option<&'a str> {
    settings.get(key).filter(|v| !v.is_empty())
}

fn conflict_message(property: &str) -> String {
    format!(
        "The property \"{property}\" must not be used together with the deprecated \"{LEGACY_BRANCH}\""
    )
}
