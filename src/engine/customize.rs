//! Rewrites the cloned `package.json` so the generated project carries the
//! chosen name.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

// First `"name": "…"` occurrence, whatever its spacing. The manifest is
// treated as text on purpose: no parsing, no validation, and a template
// without the field is written back unchanged.
static NAME_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""name"\s*:\s*"[^"]*""#).expect("name pattern is valid"));

/// Replaces the first `"name"` field of `text` with `project_name`.
pub fn rename_in_manifest(text: &str, project_name: &str) -> String {
    let replacement = format!(r#""name": "{project_name}""#);
    NAME_FIELD.replace(text, NoExpand(&replacement)).into_owned()
}

/// Reads `package.json` from the cloned project, substitutes its `name`
/// field and writes the result back.
pub fn set_package_name(project_dir: &Path, project_name: &str) -> Result<()> {
    let manifest = project_dir.join("package.json");
    let text = fs::read_to_string(&manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;

    let updated = rename_in_manifest(&text, project_name);
    fs::write(&manifest, updated)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    info!("set package name to {project_name} in {}", manifest.display());
    Ok(())
}
