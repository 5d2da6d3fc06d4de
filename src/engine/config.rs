// src/engine/config.rs

use std::path::PathBuf;

use derive_builder::Builder;

use crate::engine::fetch::{TEMPLATE_BRANCH, TEMPLATE_REPO_URL};
use crate::engine::manager::PackageManager;

/// Resolved inputs for one scaffold run, after CLI flags, the config file
/// and the interactive prompts have been merged.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct ScaffoldConfig {
    /// Value written into the generated `package.json`'s `name` field.
    pub project_name: String,

    /// Directory the template is cloned into.
    pub target_dir: PathBuf,

    pub package_manager: PackageManager,

    #[builder(default = "TEMPLATE_REPO_URL.to_string()")]
    pub template: String,

    #[builder(default = "TEMPLATE_BRANCH.to_string()")]
    pub branch: String,

    /// Keep the template's git history instead of starting from a clean tree.
    #[builder(default)]
    pub keep_git: bool,
}

impl ScaffoldConfigBuilder {
    pub fn build(&self) -> Result<ScaffoldConfig, ScaffoldConfigBuilderError> {
        self.build_internal()
    }
}
