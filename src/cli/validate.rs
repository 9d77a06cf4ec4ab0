//! Validate command - report conflicting branch settings

use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, println};
use branchline::branch::validate;
use branchline::settings::Settings;

/// Run the validate command, returning the number of messages
pub fn run_validate(settings: &Settings) -> usize {
    let mut messages = Vec::new();
    validate(&mut messages, settings);

    if messages.is_empty() {
        println!("{} Branch settings are valid", check());
    }
    for message in &messages {
        eprintln!("{} {}", cross(), message.error());
    }
    messages.len()
}
