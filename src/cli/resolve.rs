//! Resolve command - print the branch configuration of the analysis

use super::{InventoryOptions, load_inventory, project_key};
use crate::cli::style::{Stylize, arrow};
use anstream::println;
use branchline::branch::{BranchConfiguration, resolve};
use branchline::error::Result;
use branchline::settings::Settings;

/// Run the resolve command
pub async fn run_resolve(settings: &Settings, options: &InventoryOptions, json: bool) -> Result<()> {
    let project = project_key(options, settings)?;
    let inventory = load_inventory(options, settings, &project).await?;
    let config = resolve(settings, &inventory);

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    print_configuration(&project, &config);
    Ok(())
}

fn print_configuration(project: &str, config: &BranchConfiguration) {
    let mode = match config {
        BranchConfiguration::Default { .. } => "main branch",
        BranchConfiguration::Branch { .. } => "branch",
        BranchConfiguration::PullRequest { .. } => "pull request",
    };
    println!("{} {}", "Project".emphasis(), project.accent());
    println!();

    field("Mode", Some(mode));
    field("Type", Some(config.branch_type().as_str()));
    field("Name", config.name());
    if let BranchConfiguration::PullRequest { key, .. } = config {
        field("Pull request", key.as_deref());
    }
    field("Reference", config.reference_branch_name());
    field("Target", config.target_branch_name());

    if let (Some(name), Some(target)) = (config.name(), config.target_branch_name()) {
        println!();
        println!("  {} {} {}", name.accent(), arrow(), target.accent());
    }
}

fn field(label: &str, value: Option<&str>) {
    let label = format!("{:<14}", format!("{label}:"));
    match value {
        Some(value) => println!("  {}{}", label.muted(), value.accent()),
        None => println!("  {}{}", label.muted(), "-".muted()),
    }
}
