//! Repository location parsing.
//!
//! A repository location is a URL with one of these shapes:
//!
//! ```text
//! github:  https://github.com/{owner}/{repo}/{releases|tree}/{ref}/{resource-path}[#apply-path]
//! local:   [file://]{filesystem path}[#apply-path]
//! generic: http(s)://{anything else}
//! ```
//!
//! [`Location::parse`] classifies a location once into a [`LocationKind`]
//! that the lookup dispatcher matches exhaustively.

use std::fmt;
use std::path::PathBuf;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{ClusteradmError, Result};

const GITHUB_HOST: &str = "github.com";

/// How resources are read from a GitHub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubMode {
    /// Download an asset attached to a release.
    Releases,
    /// Read files from the repository source tree.
    Tree,
}

impl GitHubMode {
    fn parse(segment: &str) -> Option<Self> {
        match segment {
            "releases" => Some(Self::Releases),
            "tree" => Some(Self::Tree),
            _ => None,
        }
    }
}

/// A parsed `{owner}/{repo}/{releases|tree}/{ref}/{resource-path}` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubPath {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Release assets or source tree.
    pub mode: GitHubMode,
    /// `latest`, a tag, a branch or a commit SHA.
    pub reference: String,
    /// Asset name (releases) or file/folder path (tree).
    ///
    /// Release assets are a single segment; anything after it is ignored.
    pub resource_path: String,
}

impl GitHubPath {
    /// Parse a repository path, with or without a leading slash.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRepositoryPath` if there are fewer than five segments
    /// or the third segment is neither `releases` nor `tree`.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        if segments.len() < 5 {
            return Err(ClusteradmError::InvalidRepositoryPath {
                path: path.to_string(),
                message: format!("expected 5 parts, found {}", segments.len()),
            });
        }

        let mode = GitHubMode::parse(segments[2]).ok_or_else(|| {
            ClusteradmError::InvalidRepositoryPath {
                path: path.to_string(),
                message: format!(
                    "expected \"releases\" or \"tree\", found {:?}",
                    segments[2]
                ),
            }
        })?;

        let resource_path = match mode {
            GitHubMode::Releases => segments[4].to_string(),
            GitHubMode::Tree => segments[4..].join("/"),
        };

        Ok(Self {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            mode,
            reference: segments[3].to_string(),
            resource_path,
        })
    }
}

impl fmt::Display for GitHubPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The backing strategy for a repository location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationKind {
    /// Asset of a GitHub release.
    GitHubRelease(GitHubPath),
    /// File or folder in a GitHub repository source tree.
    GitHubTree(GitHubPath),
    /// Local file or folder.
    Local(PathBuf),
    /// Generic http/https location (not implemented).
    UnsupportedHttp(String),
}

/// A classified repository location with its apply hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Where the resources live.
    pub kind: LocationKind,
    /// URL fragment naming the entry point resource; empty when absent.
    pub apply: String,
}

impl Location {
    /// Parse and classify the repository location of `component`.
    ///
    /// # Errors
    ///
    /// - `InvalidRepositoryUrl` if `raw` is not a valid URL
    /// - `InvalidRepositoryPath` if a GitHub URL has a malformed path
    /// - `UnsupportedLocation` if the URL scheme is not supported
    pub fn parse(component: &str, raw: &str) -> Result<Self> {
        match Url::parse(raw) {
            Ok(url) => Self::classify(&url),
            // scheme-less locations are plain filesystem paths
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let (path, apply) = raw.split_once('#').unwrap_or((raw, ""));
                Ok(Self {
                    kind: LocationKind::Local(PathBuf::from(path)),
                    apply: apply.to_string(),
                })
            }
            Err(e) => Err(ClusteradmError::InvalidRepositoryUrl {
                component: component.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn classify(url: &Url) -> Result<Self> {
        let apply = url.fragment().map(decode_fragment).unwrap_or_default();
        let host = url.host_str().unwrap_or_default();

        let kind = match url.scheme() {
            "https" if host == GITHUB_HOST => {
                let path = GitHubPath::parse(url.path())?;
                match path.mode {
                    GitHubMode::Releases => LocationKind::GitHubRelease(path),
                    GitHubMode::Tree => LocationKind::GitHubTree(path),
                }
            }
            "http" | "https" => LocationKind::UnsupportedHttp(url.to_string()),
            "file" => LocationKind::Local(file_url_path(url)),
            scheme => {
                return Err(ClusteradmError::UnsupportedLocation {
                    message: format!("{:?} repositories are not supported", scheme),
                })
            }
        };

        Ok(Self { kind, apply })
    }
}

/// Percent-decode a URL fragment so it can be compared with resource paths.
fn decode_fragment(fragment: &str) -> String {
    percent_decode_str(fragment).decode_utf8_lossy().into_owned()
}

/// Join host and path of a `file:` URL into a filesystem path.
fn file_url_path(url: &Url) -> PathBuf {
    match url.host_str() {
        None | Some("") | Some("localhost") => url
            .to_file_path()
            .unwrap_or_else(|_| PathBuf::from(url.path())),
        Some(host) => PathBuf::from(host).join(url.path().trim_start_matches('/')),
    }
}
