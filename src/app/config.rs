//! Application configuration: where template catalogs live.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Colon-separated list of catalog roots, highest priority first.
pub const TEMPLATES_ENV_VAR: &str = "PODSMITH_TEMPLATES";

/// Per-project configuration file, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "podsmith.toml";

/// `podsmith.toml` shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodsmithConfig {
    #[serde(default)]
    pub templates: TemplatesSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatesSection {
    /// Catalog roots, highest priority first.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}

/// Resolve the catalog roots to scan, highest priority first.
///
/// Precedence: `--templates` flags, then `PODSMITH_TEMPLATES`
/// (colon-separated), then `[templates] roots` from `podsmith.toml` in the
/// working directory. An empty result is fine: the bundled catalog always
/// sits behind whatever this returns.
pub fn resolve_catalog_roots(cli_roots: &[PathBuf]) -> Result<Vec<PathBuf>, AppError> {
    resolve_in_dir(cli_roots, Path::new("."))
}

fn resolve_in_dir(cli_roots: &[PathBuf], config_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !cli_roots.is_empty() {
        return Ok(cli_roots.to_vec());
    }

    if let Ok(value) = env::var(TEMPLATES_ENV_VAR) {
        let roots: Vec<PathBuf> =
            value.split(':').filter(|part| !part.is_empty()).map(PathBuf::from).collect();
        if !roots.is_empty() {
            return Ok(roots);
        }
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        let config: PodsmithConfig = toml::from_str(&content)?;
        return Ok(config.templates.roots);
    }

    Ok(Vec::new())
}
