//! clusteradm - Cluster API management cluster bootstrapping.
//!
//! clusteradm discovers the yaml resources needed to install cluster API,
//! a bootstrap provider and infrastructure providers on a management
//! cluster. Resources are read from local folders, GitHub release assets
//! or GitHub source trees.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`client`] - Management cluster operations
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`resources`] - Component resource discovery
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use clusteradm::resources::lookup;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let dir = temp.path().join("docker");
//! std::fs::create_dir_all(&dir).unwrap();
//! std::fs::write(dir.join("infrastructure-components.yaml"), "kind: Namespace").unwrap();
//!
//! let mut repositories = HashMap::new();
//! repositories.insert("docker".to_string(), dir.display().to_string());
//!
//! let bundle = lookup("docker", &repositories, None).unwrap();
//! assert_eq!(bundle.resources()[0].path(), "docker/infrastructure-components.yaml");
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod ui;

pub use error::{ClusteradmError, Result};
