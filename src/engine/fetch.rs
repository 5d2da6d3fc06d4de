//! Clones the template repository into the target directory.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::common::cmd;
use crate::engine::config::ScaffoldConfig;

/// Template repository every project is scaffolded from.
pub const TEMPLATE_REPO_URL: &str = "https://github.com/create-app-dev/webapp-template.git";

/// Branch tracked by released versions of the template.
pub const TEMPLATE_BRANCH: &str = "stable";

/// Creates the target directory, clones the template into it, checks out the
/// release branch and (unless configured otherwise) drops the template's git
/// history so the project starts from a clean tree.
///
/// There is no rollback: a directory left behind by a failed clone stays on
/// disk for the user to inspect.
pub fn fetch_template(config: &ScaffoldConfig) -> Result<()> {
    fs::create_dir_all(&config.target_dir).with_context(|| {
        format!(
            "Failed to create project directory {}",
            config.target_dir.display()
        )
    })?;

    info!(
        "cloning {} (branch {}) into {}",
        config.template,
        config.branch,
        config.target_dir.display()
    );

    // Display-only animation. The clone itself is a blocking child process
    // with captured output; the spinner is started before it and stopped
    // right after, never consulted for real progress.
    let spinner = start_spinner(format!("Cloning template from {}…", config.template));
    let cloned = clone_and_checkout(config);
    spinner.finish_and_clear();
    cloned?;

    if !config.keep_git {
        strip_git_metadata(&config.target_dir)?;
    }

    println!(
        "{} Template ready in `{}`.",
        "[✓]".green().bold(),
        config.project_name
    );
    Ok(())
}

fn clone_and_checkout(config: &ScaffoldConfig) -> Result<()> {
    let target = config.target_dir.to_string_lossy();
    cmd::run(
        "git",
        &["clone", &config.template, target.as_ref()],
        "git clone",
    )?;
    cmd::run_in(
        &config.target_dir,
        "git",
        &["checkout", &config.branch],
        "git checkout",
    )?;
    Ok(())
}

fn strip_git_metadata(target_dir: &Path) -> Result<()> {
    let git_dir = target_dir.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir)
            .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
    }
    Ok(())
}

fn start_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
