//! User input utilities for interactive command-line prompts.

use std::io::{self, Write};

use anyhow::{Context, Result};
use toolwire_core::ExampleLoad;

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok(input)
}

/// Interpret a merge/replace answer. `None` means cancel.
pub fn parse_load_choice(input: &str) -> Option<ExampleLoad> {
    match input.trim().to_lowercase().as_str() {
        "m" | "merge" => Some(ExampleLoad::Merge),
        "r" | "replace" => Some(ExampleLoad::Replace),
        _ => None,
    }
}

/// Ask whether to merge into or replace a non-empty registry.
pub fn prompt_load_mode(current: usize) -> Result<Option<ExampleLoad>> {
    println!("You already have {current} connection(s) configured.");
    let input = read_line("[m]erge with them, [r]eplace them, or anything else to cancel:")?;
    Ok(parse_load_choice(&input))
}
