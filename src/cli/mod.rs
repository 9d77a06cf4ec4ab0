//! CLI commands
//!
//! Command implementations for the `branchline` binary.

mod base_line;
mod key;
mod resolve;
pub mod style;
mod validate;

pub use base_line::run_base_line;
pub use key::run_key;
pub use resolve::run_resolve;
pub use validate::run_validate;

use branchline::config::ServerConfig;
use branchline::error::{Error, Result};
use branchline::inventory::{FileInventoryLoader, InventoryLoader, ServerInventoryLoader};
use branchline::settings::Settings;
use branchline::types::BranchInventory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Property naming the project when `--project` is not given
const PROJECT_KEY_PROPERTY: &str = "sonar.projectKey";

/// Where the branch inventory comes from
#[derive(Debug, Default)]
pub struct InventoryOptions {
    /// Project key flag
    pub project: Option<String>,
    /// Inventory JSON file; the server is used when absent
    pub inventory: Option<PathBuf>,
    /// Server URL flag
    pub host: Option<String>,
    /// Token flag
    pub token: Option<String>,
}

/// Build the analysis settings from the properties file and `-D` overrides
///
/// Overrides are applied in order, after the file.
pub fn load_settings(properties: Option<&Path>, overrides: &[String]) -> Result<Settings> {
    let mut settings = match properties {
        Some(path) => Settings::from_properties_file(path)?,
        None => Settings::new(),
    };
    for assignment in overrides {
        settings.apply_override(assignment)?;
    }
    Ok(settings)
}

/// Project key from the flag or the settings
fn project_key(options: &InventoryOptions, settings: &Settings) -> Result<String> {
    options
        .project
        .as_deref()
        .or_else(|| settings.get_trimmed(PROJECT_KEY_PROPERTY))
        .map(ToString::to_string)
        .ok_or_else(|| {
            Error::Config(format!(
                "no project key: pass --project or set {PROJECT_KEY_PROPERTY}"
            ))
        })
}

/// Load the inventory of the project from the selected source
async fn load_inventory(
    options: &InventoryOptions,
    settings: &Settings,
    project_key: &str,
) -> Result<BranchInventory> {
    let loader: Box<dyn InventoryLoader> = match &options.inventory {
        Some(path) => {
            let loader = FileInventoryLoader::new(path.clone());
            debug!("Reading inventory from {}", loader.path().display());
            Box::new(loader)
        }
        None => {
            let config =
                ServerConfig::resolve(options.host.as_deref(), options.token.as_deref(), settings)?;
            debug!(
                "Loading inventory from {} (token: {:?})",
                config.host_url, config.token_source
            );
            Box::new(ServerInventoryLoader::new(&config))
        }
    };
    loader.load(project_key).await
}
