//! Interactive prompts that collect the scaffold inputs.

use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use inquire::{Select, Text};

use crate::engine::manager::PackageManager;

/// Source of interactive answers. Implemented by the inquire frontend below
/// and by scripted fakes in tests.
pub trait Prompter {
    fn input(&self, message: &str) -> Result<String>;
    fn select_manager(&self) -> Result<PackageManager>;
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn input(&self, message: &str) -> Result<String> {
        Text::new(message).prompt().context("Failed to read input")
    }

    fn select_manager(&self) -> Result<PackageManager> {
        Select::new(
            "Which package manager do you want to use?",
            PackageManager::ALL.to_vec(),
        )
        .prompt()
        .context("Failed to read package manager selection")
    }
}

/// Returns the trimmed project name, prompting in a loop until a non-empty
/// value is entered when no usable argument was given.
pub fn collect_project_name(
    arg: Option<&str>,
    interactive: bool,
    prompter: &dyn Prompter,
) -> Result<String> {
    if let Some(name) = arg {
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
    if !interactive {
        bail!("A project name is required when prompts are disabled");
    }
    loop {
        let answer = prompter.input("What is your project named?")?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        println!("{}", "The project name cannot be empty.".yellow());
    }
}

/// Checks for an entry named `name` under `cwd`. On a collision the user is
/// asked once for a replacement, which is returned as entered (trimmed, but
/// not re-checked against further collisions).
pub fn resolve_collision(
    cwd: &Path,
    name: &str,
    interactive: bool,
    prompter: &dyn Prompter,
) -> Result<String> {
    match cwd.join(name).metadata() {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(name.to_string()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to check for an existing `{name}` directory"));
        }
    }

    if !interactive {
        bail!("A directory named `{name}` already exists here");
    }
    println!(
        "{}",
        format!("A directory named `{name}` already exists.").yellow()
    );
    let replacement = prompter.input("Pick a different project name:")?;
    Ok(replacement.trim().to_string())
}
