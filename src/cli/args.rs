//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{ClusteradmError, Result};
use crate::resources::github::DEFAULT_API_URL;
use crate::resources::DEFAULT_BOOTSTRAP;

/// clusteradm - Cluster API management cluster bootstrapping.
#[derive(Debug, Parser)]
#[command(name = "clusteradm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .clusteradm/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize the management cluster
    Init(InitArgs),

    /// List the repository of every known component
    List(ListArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Infrastructure providers to initialize (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub providers: Vec<String>,

    /// Provider used to bootstrap (kubeadm when given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_BOOTSTRAP)]
    pub bootstrap: Option<String>,

    /// Repositories for cluster API components resources, as component=url (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub repositories: Vec<String>,

    /// Personal access token for using the GitHub API without rate limits
    #[arg(long, env = "CLUSTERADM_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub API endpoint
    #[arg(long, env = "CLUSTERADM_GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub github_api_url: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Repository overrides, as component=url (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub repositories: Vec<String>,
}

/// Parse `component=url` pairs into a repository map.
///
/// Later entries for the same component win.
///
/// # Errors
///
/// Returns `InvalidArgument` for an entry without `=`, or with an empty
/// component or url.
pub fn parse_repositories(entries: &[String]) -> Result<HashMap<String, String>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(component, url)| (component.trim(), url.trim()))
                .filter(|(component, url)| !component.is_empty() && !url.is_empty())
                .map(|(component, url)| (component.to_string(), url.to_string()))
                .ok_or_else(|| ClusteradmError::InvalidArgument {
                    message: format!(
                        "invalid repository {:?}: expected component=url",
                        entry
                    ),
                })
        })
        .collect()
}
