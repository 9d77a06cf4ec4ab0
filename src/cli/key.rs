//! Key command - print the component key on the analyzed branch

use super::{InventoryOptions, load_inventory, project_key};
use anstream::println;
use branchline::branch::{Branch, resolve};
use branchline::error::Result;
use branchline::settings::Settings;

/// Run the key command
pub async fn run_key(
    settings: &Settings,
    options: &InventoryOptions,
    file_path: Option<&str>,
) -> Result<()> {
    let project = project_key(options, settings)?;
    let inventory = load_inventory(options, settings, &project).await?;
    let branch = Branch::from_configuration(&resolve(settings, &inventory), &inventory);

    println!("{}", branch.generate_key(&project, file_path)?);
    Ok(())
}
