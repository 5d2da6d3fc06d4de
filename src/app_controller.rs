use std::env;

use anyhow::{Context, Result, bail};
use log::info;

use crate::{
    engine::{
        config::{ScaffoldConfig, ScaffoldConfigBuilder},
        config_file::ConfigFile,
        customize, fetch,
        manager::PackageManager,
    },
    ui::{
        cli::Cli,
        output,
        prompt::{self, InquirePrompter, Prompter},
    },
};

/// The primary orchestration function for the application.
///
/// Control flows strictly in this order: collect name, check collision,
/// select package manager, clone template, rewrite the manifest, report.
/// Every fatal error propagates out and terminates the process non-zero.
pub fn run(args: Cli) -> Result<()> {
    let cfg_file: ConfigFile =
        confy::load("create-app", None).context("Failed to load config file")?;
    let prompter = InquirePrompter;
    let interactive = !args.no_interactive;

    let name = prompt::collect_project_name(args.name.as_deref(), interactive, &prompter)?;
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let name = prompt::resolve_collision(&cwd, &name, interactive, &prompter)?;

    let package_manager =
        resolve_package_manager(&args, &cfg_file, interactive, &prompter)?;

    let config = build_config(&args, &cfg_file, &cwd, name, package_manager)?;
    info!("scaffolding `{}` with {}", config.project_name, config.package_manager);

    fetch::fetch_template(&config)?;
    customize::set_package_name(&config.target_dir, &config.project_name)?;
    output::print_completion(&config);

    Ok(())
}

// ──────────────────────────────────────────────────────────────
//  Helpers (selection precedence, config merging)
// ──────────────────────────────────────────────────────────────

fn resolve_package_manager(
    args: &Cli,
    cfg_file: &ConfigFile,
    interactive: bool,
    prompter: &dyn Prompter,
) -> Result<PackageManager> {
    match args.package_manager.or(cfg_file.package_manager) {
        Some(manager) => Ok(manager),
        None if interactive => prompter.select_manager(),
        None => bail!("--package-manager is required when prompts are disabled"),
    }
}

fn build_config(
    args: &Cli,
    cfg_file: &ConfigFile,
    cwd: &std::path::Path,
    name: String,
    package_manager: PackageManager,
) -> Result<ScaffoldConfig> {
    let mut builder = ScaffoldConfigBuilder::default();
    builder
        .target_dir(cwd.join(&name))
        .project_name(name)
        .package_manager(package_manager)
        .keep_git(args.keep_git || cfg_file.keep_git.unwrap_or(false));

    if let Some(template) = args.template.clone().or_else(|| cfg_file.template.clone()) {
        builder.template(template);
    }
    if let Some(branch) = args.branch.clone().or_else(|| cfg_file.branch.clone()) {
        builder.branch(branch);
    }

    builder
        .build()
        .context("Failed to build scaffold configuration")
}
