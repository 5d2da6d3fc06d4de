// src/ui/cli.rs

use clap::Parser;

use crate::engine::manager::PackageManager;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Name of the project to create; prompted for when omitted
    pub name: Option<String>,

    /// Package manager used for the generated instructions
    #[clap(short = 'p', long = "package-manager")]
    pub package_manager: Option<PackageManager>,

    /// Clone from an alternative template repository (URL or local path)
    #[clap(short = 't', long)]
    pub template: Option<String>,

    /// Branch of the template repository to check out after cloning
    #[clap(short = 'b', long)]
    pub branch: Option<String>,

    /// Keep the template's git history instead of starting from a clean tree
    #[clap(long)]
    pub keep_git: bool,

    /// Disable all interactive prompts (for use in scripts)
    #[clap(long)]
    pub no_interactive: bool,
}
