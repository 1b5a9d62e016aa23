//! Configuration loading for clusteradm.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layered merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! Configuration is discovered and merged in this order:
//! 1. User global config (`~/.clusteradm/config.yml`)
//! 2. Project config (`.clusteradm/config.yml`)
//! 3. Local overrides (`.clusteradm/config.local.yml`)
//!
//! Command line flags take precedence over every file.
//!
//! # Example
//!
//! ```
//! use clusteradm::config::{load_config, OutputMode};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".clusteradm");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "providers: [aws]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.providers, vec!["aws"]);
//! assert_eq!(config.settings.default_output, OutputMode::Normal);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{merge_into, merge_layers};
pub use schema::{ClusteradmConfig, OutputMode, Settings};
