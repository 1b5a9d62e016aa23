//! GitHub REST API payloads.
//!
//! Only the fields used for resource discovery are modeled; everything
//! else in the responses is ignored.

use serde::Deserialize;

/// A repository release.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Tag the release was created from.
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Files attached to the release.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Tag name, or an empty string for untagged releases.
    pub fn tag(&self) -> &str {
        self.tag_name.as_deref().unwrap_or_default()
    }

    /// Find an asset by exact name.
    pub fn asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// A file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset identifier used by the download endpoint.
    pub id: u64,
    /// File name.
    pub name: String,
}

/// A commit reference as embedded in branch and tag listings.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// A branch or a tag, as returned by the list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub commit: CommitRef,
}

/// An entry of the contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Content encoding; only set for files.
    #[serde(default)]
    pub encoding: Option<String>,
    /// Encoded content; only set for files.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response of the contents API: a single file or a folder listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    /// The path is a folder; entries carry no content.
    Directory(Vec<ContentEntry>),
    /// The path is a file.
    File(ContentEntry),
}

/// Result of requesting a release asset download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDownload {
    /// The API returned the asset content directly.
    Content(Vec<u8>),
    /// The API redirected to a download location.
    Redirect(String),
}
