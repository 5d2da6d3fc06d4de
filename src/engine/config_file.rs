use serde::{Deserialize, Serialize};

use crate::engine::manager::PackageManager;

/// Represents the structure of the `config.toml` file.
/// All fields are optional, so users only need to specify what they want to
/// override; CLI flags take precedence over everything here.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub package_manager: Option<PackageManager>,
    pub template: Option<String>,
    pub branch: Option<String>,
    pub keep_git: Option<bool>,
}
