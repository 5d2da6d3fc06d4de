//! Prints the post-scaffold report: package manager availability and the
//! commands to run next.

use colored::Colorize;

use crate::engine::config::ScaffoldConfig;
use crate::engine::manager::PackageManager;

pub fn print_completion(config: &ScaffoldConfig) {
    print_manager_status(config.package_manager);

    println!();
    println!("Next steps:");
    for step in next_steps(config) {
        println!("  {step}");
    }
    println!();
}

/// The command sequence suggested after a successful scaffold, in the
/// selected manager's syntax.
pub fn next_steps(config: &ScaffoldConfig) -> Vec<String> {
    let manager = config.package_manager;
    let mut steps = vec![
        format!("cd {}", config.project_name),
        manager.install_command().to_string(),
    ];
    steps.extend(
        ["clean", "build", "start"]
            .iter()
            .map(|script| manager.run_script(script)),
    );
    steps
}

fn print_manager_status(manager: PackageManager) {
    if manager.is_installed() {
        println!("{} {manager} is installed.", "[✓]".green().bold());
        return;
    }

    println!(
        "{} {manager} does not appear to be installed.",
        "[!]".yellow().bold()
    );
    match manager.global_install_hint() {
        Some(hint) => println!("    Install it with: {}", hint.cyan()),
        None => println!("    Install Node.js to get {manager}: https://nodejs.org"),
    }
}
