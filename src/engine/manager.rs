//! The closed set of package managers a generated project can be driven with.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::cmd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl PackageManager {
    /// Menu order shown by the interactive selector.
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Name of the executable.
    pub fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Invocation that installs the generated project's dependencies.
    pub fn install_command(self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm install",
            Self::Bun => "bun install",
        }
    }

    /// How a lifecycle script is invoked with this manager. Yarn runs
    /// scripts directly; the others go through a `run` subcommand.
    pub fn run_script(self, script: &str) -> String {
        match self {
            Self::Yarn => format!("yarn {script}"),
            other => format!("{} run {script}", other.command()),
        }
    }

    /// Command that installs the manager itself, for managers that do not
    /// ship with Node.
    pub fn global_install_hint(self) -> Option<&'static str> {
        match self {
            Self::Npm => None,
            Self::Yarn => Some("npm install -g yarn"),
            Self::Pnpm => Some("npm install -g pnpm"),
            Self::Bun => Some("npm install -g bun"),
        }
    }

    /// Probes for the executable by running its version command. A failed
    /// probe is the normal "not installed" signal, never an error.
    pub fn is_installed(self) -> bool {
        cmd::succeeds(self.command(), &["--version"])
    }
}
