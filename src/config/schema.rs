//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.clusteradm/config.yml` file format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure.
///
/// ```yaml
/// settings:
///   default_output: quiet
/// github_token: ghp_xxx
/// bootstrap: kubeadm
/// providers: [aws]
/// repositories:
///   aws: https://github.com/org/provider-aws/releases/v1.0.0/infrastructure-components.yaml
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteradmConfig {
    /// Global settings
    pub settings: Settings,

    /// Token used to raise the GitHub API rate limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Bootstrap provider to install
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap: Option<String>,

    /// Infrastructure providers to install, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<String>,

    /// Repository location per component, overriding the defaults
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub repositories: HashMap<String, String>,
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
