//! Error types for clusteradm operations.
//!
//! This module defines [`ClusteradmError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Resolution failures are attributed to their component with
//! [`ClusteradmError::for_component`] before they reach the user.

use std::path::PathBuf;
use thiserror::Error;

use crate::resources::github::GitHubApiError;

/// Core error type for clusteradm operations.
#[derive(Debug, Error)]
pub enum ClusteradmError {
    /// The component has neither a user provided nor a default repository.
    #[error("missing repository for {component:?}")]
    MissingRepository { component: String },

    /// The repository location for a component is not a valid URL.
    #[error("repository for {component:?} is not a valid url: {message}")]
    InvalidRepositoryUrl { component: String, message: String },

    /// A GitHub repository path does not have the expected shape.
    #[error("repository path {path:?} is not valid: {message}")]
    InvalidRepositoryPath { path: String, message: String },

    /// The repository location kind is recognized but not supported.
    #[error("repository location not supported: {message}")]
    UnsupportedLocation { message: String },

    /// A tree reference matches no branch or tag.
    #[error("{reference:?} does not match any branch or tag")]
    RefNotFound { reference: String },

    /// No release exists with the requested tag.
    #[error("failed to get release {tag:?}")]
    ReleaseNotFound { tag: String },

    /// No release with a semantic version tag exists.
    #[error("failed to get latest release for {repository}: no release is tagged with a semantic version")]
    NoLatestRelease { repository: String },

    /// The selected release does not contain the requested asset.
    #[error("the {release:?} release does not contain the asset {asset:?}")]
    AssetNotFound { asset: String, release: String },

    /// A repository file is not base64 encoded.
    #[error("invalid encoding for {path:?}: expected base64, found {}", encoding.as_deref().unwrap_or("none"))]
    UnsupportedEncoding {
        path: String,
        encoding: Option<String>,
    },

    /// The GitHub API rate limit was hit.
    #[error("hitting rate limit for github api. Please get a personal API token and assign it to the CLUSTERADM_GITHUB_TOKEN env var")]
    RateLimitExceeded,

    /// Any other GitHub API failure, with the attempted operation.
    #[error("{context}: {source}")]
    GitHubApi {
        context: String,
        #[source]
        source: GitHubApiError,
    },

    /// Downloading a release asset from its redirect location failed.
    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Repository content could not be decoded.
    #[error("failed to decode {path:?}: {message}")]
    Decode { path: String, message: String },

    /// Walking or reading a local repository failed.
    #[error("error reading local repository {}: {source}", path.display())]
    LocalRepository {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resolution failed for a specific component.
    #[error("failed to get resources for {component:?}: {source}")]
    Component {
        component: String,
        #[source]
        source: Box<ClusteradmError>,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A command line argument could not be interpreted.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClusteradmError {
    /// Attribute this error to the component whose resolution triggered it.
    pub fn for_component(self, component: &str) -> Self {
        Self::Component {
            component: component.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for clusteradm operations.
pub type Result<T> = std::result::Result<T, ClusteradmError>;
