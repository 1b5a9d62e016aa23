//! Configuration file discovery and loading.
//!
//! Every configuration file is optional: without any of them the defaults
//! apply and everything can be given on the command line.

use crate::config::merger::merge_layers;
use crate::config::schema::ClusteradmConfig;
use crate::error::{ClusteradmError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user and per-project configuration folder.
pub const CONFIG_DIR: &str = ".clusteradm";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.clusteradm/config.yml`)
/// 2. Project config (`.clusteradm/config.yml`)
/// 3. Local overrides (`.clusteradm/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let user_dir = dirs::home_dir().map(|home| home.join(CONFIG_DIR));
        Self::discover_with_user_dir(project_root, user_dir.as_deref())
    }

    /// Discover config files with an explicit user config folder.
    pub fn discover_with_user_dir(project_root: &Path, user_dir: Option<&Path>) -> Self {
        let project_dir = project_root.join(CONFIG_DIR);
        Self {
            user_global: user_dir.and_then(|dir| existing(dir.join("config.yml"))),
            project: existing(project_dir.join("config.yml")),
            project_local: existing(project_dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&Path> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// The first folder containing `.clusteradm` or `.git` wins.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Load a config file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ClusteradmError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ClusteradmError::Io(e)
        }
    })?;

    // an empty file parses as null
    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| ClusteradmError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    })
}

fn parse_value(value: serde_yaml::Value, path: &Path) -> Result<ClusteradmConfig> {
    serde_yaml::from_value(value).map_err(|e| ClusteradmError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ClusteradmConfig> {
    parse_value(load_config_value(path)?, path)
}

/// Load and merge every config file that applies to a project.
pub fn load_merged_config(paths: &ConfigPaths, project_root: &Path) -> Result<ClusteradmConfig> {
    let existing = paths.all_existing();
    for path in &existing {
        tracing::debug!("Loading config from {}", path.display());
    }

    let layers = existing
        .into_iter()
        .map(load_config_value)
        .collect::<Result<Vec<_>>>()?;

    parse_value(
        merge_layers(layers),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ClusteradmConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(&ConfigPaths::discover(project_root), project_root),
    }
}
