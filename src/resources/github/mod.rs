//! Resources hosted in a GitHub repository.
//!
//! Two reading modes are supported:
//!
//! - **releases**: a single asset attached to a release, picked by tag or
//!   as the highest semantic version when the reference is `latest`
//! - **tree**: a file or folder of the source tree at a branch, tag or
//!   commit SHA; folders are read recursively

mod client;
mod types;

pub use client::{GitHubApiError, GitHubClient, DEFAULT_API_URL};
pub use types::{AssetDownload, ContentEntry, Contents, NamedRef, Release, ReleaseAsset};

use std::cmp::Ordering;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ClusteradmError, Result};
use crate::resources::location::{GitHubMode, GitHubPath};
use crate::resources::resource::Resource;

/// Length of a full hexadecimal commit SHA.
const SHA_LENGTH: usize = 40;

/// Reference selecting the release with the highest semantic version.
const LATEST: &str = "latest";

/// A GitHub repository where the resources for deploying cluster API,
/// infrastructure providers or bootstrap providers are stored.
#[derive(Debug)]
pub struct GitHubRepository {
    owner: String,
    repo: String,
    client: GitHubClient,
}

impl GitHubRepository {
    /// Create a repository handle using `client` for API access.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, client: GitHubClient) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            client,
        }
    }

    /// Read the resources selected by `path`.
    pub fn resources(&self, path: &GitHubPath) -> Result<Vec<Resource>> {
        match path.mode {
            GitHubMode::Releases => {
                let release = if path.reference == LATEST {
                    self.latest_release()?
                } else {
                    self.release_by_tag(&path.reference)?
                };
                tracing::info!(
                    "downloading resources from {:?} release assets in {:?} github repository...",
                    release.tag(),
                    self.to_string()
                );
                self.download_release_asset(&release, &path.resource_path)
            }
            GitHubMode::Tree => {
                let sha = self.resolve_sha(&path.reference)?;
                tracing::info!(
                    "downloading resources from tree content in {:?} github repository (might take few seconds)...",
                    self.to_string()
                );
                self.download_tree(&sha, &path.resource_path)
            }
        }
    }

    /// The release whose tag is the highest semantic version.
    ///
    /// Tags may carry a single leading `v`. Releases without a tag, or whose
    /// tag is not a semantic version, are ignored. Build metadata plays no
    /// part in the ordering; on equal precedence the first release listed
    /// wins.
    pub fn latest_release(&self) -> Result<Release> {
        tracing::debug!("Reading latest release");
        let releases = self
            .client
            .list_releases(&self.owner, &self.repo)
            .map_err(|e| api_error(e, "failed to read releases"))?;

        let mut latest: Option<(semver::Version, Release)> = None;
        for release in releases {
            let Some(version) = parse_tag(release.tag()) else {
                continue;
            };
            if latest
                .as_ref()
                .is_none_or(|(best, _)| version.cmp_precedence(best) == Ordering::Greater)
            {
                latest = Some((version, release));
            }
        }

        let (_, release) = latest.ok_or_else(|| ClusteradmError::NoLatestRelease {
            repository: self.to_string(),
        })?;
        tracing::debug!("> release {:?}", release.tag());
        Ok(release)
    }

    /// The release created from `tag`.
    pub fn release_by_tag(&self, tag: &str) -> Result<Release> {
        tracing::debug!("Reading {:?} release", tag);
        self.client
            .release_by_tag(&self.owner, &self.repo, tag)
            .map_err(|e| match e {
                GitHubApiError::NotFound { .. } => ClusteradmError::ReleaseNotFound {
                    tag: tag.to_string(),
                },
                other => api_error(other, &format!("failed to read release {:?}", tag)),
            })
    }

    /// Download the asset named `asset_name` from `release`.
    pub fn download_release_asset(
        &self,
        release: &Release,
        asset_name: &str,
    ) -> Result<Vec<Resource>> {
        tracing::debug!("Downloading {:?}", asset_name);
        let asset = release
            .asset(asset_name)
            .ok_or_else(|| ClusteradmError::AssetNotFound {
                asset: asset_name.to_string(),
                release: release.tag().to_string(),
            })?;

        let download = self
            .client
            .download_asset(&self.owner, &self.repo, asset.id)
            .map_err(|e| {
                api_error(
                    e,
                    &format!(
                        "failed to download asset {:?} from {:?} release",
                        asset_name,
                        release.tag()
                    ),
                )
            })?;

        let content = match download {
            AssetDownload::Content(content) => content,
            AssetDownload::Redirect(location) => {
                self.client.download(&location).map_err(|e| match e {
                    GitHubApiError::RateLimited => ClusteradmError::RateLimitExceeded,
                    other => ClusteradmError::Download {
                        url: location.clone(),
                        message: other.to_string(),
                    },
                })?
            }
        };

        Ok(vec![Resource::new(asset_name, content)])
    }

    /// Resolve a branch or tag name to a commit SHA.
    ///
    /// A 40 character reference is taken as a SHA without any API call.
    /// Branches are searched before tags.
    pub fn resolve_sha(&self, reference: &str) -> Result<String> {
        if reference.len() == SHA_LENGTH {
            return Ok(reference.to_string());
        }
        tracing::debug!("Reading SHA for {:?}", reference);

        let branches = self
            .client
            .list_branches(&self.owner, &self.repo)
            .map_err(|e| api_error(e, "error reading branches"))?;
        if let Some(sha) = find_ref(&branches, reference) {
            return Ok(sha);
        }

        let tags = self
            .client
            .list_tags(&self.owner, &self.repo)
            .map_err(|e| api_error(e, "failed to list tags"))?;
        find_ref(&tags, reference).ok_or_else(|| ClusteradmError::RefNotFound {
            reference: reference.to_string(),
        })
    }

    /// Read the file or folder at `path` as of commit `sha`.
    ///
    /// Folders are read recursively in listing order. Resource paths are the
    /// repository paths reported by the API.
    pub fn download_tree(&self, sha: &str, path: &str) -> Result<Vec<Resource>> {
        tracing::debug!("Downloading {:?}", path);
        let contents = self
            .client
            .contents(&self.owner, &self.repo, path, sha)
            .map_err(|e| api_error(e, &format!("failed to get content for {:?}", path)))?;

        match contents {
            Contents::File(entry) => Ok(vec![decode_file(entry)?]),
            Contents::Directory(entries) => {
                let mut resources = Vec::new();
                for entry in entries {
                    resources.extend(self.download_tree(sha, &entry.path)?);
                }
                Ok(resources)
            }
        }
    }
}

impl fmt::Display for GitHubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Resolve the resources selected by a GitHub repository path.
///
/// `token` raises the API rate limit when set; `api_url` selects the API
/// endpoint.
pub fn resolve(path: &GitHubPath, token: Option<&str>, api_url: &str) -> Result<Vec<Resource>> {
    let client = GitHubClient::new(api_url, token)
        .map_err(|e| api_error(e, "failed to create github client"))?;
    GitHubRepository::new(&path.owner, &path.repo, client).resources(path)
}

/// Map an API failure, turning rate limiting into its dedicated error.
fn api_error(err: GitHubApiError, context: &str) -> ClusteradmError {
    match err {
        GitHubApiError::RateLimited => ClusteradmError::RateLimitExceeded,
        source => ClusteradmError::GitHubApi {
            context: context.to_string(),
            source,
        },
    }
}

fn parse_tag(tag: &str) -> Option<semver::Version> {
    if tag.is_empty() {
        return None;
    }
    semver::Version::parse(tag.strip_prefix('v').unwrap_or(tag)).ok()
}

fn find_ref(refs: &[NamedRef], name: &str) -> Option<String> {
    refs.iter()
        .find(|r| r.name == name)
        .map(|r| r.commit.sha.clone())
}

fn decode_file(entry: ContentEntry) -> Result<Resource> {
    if entry.encoding.as_deref() != Some("base64") {
        return Err(ClusteradmError::UnsupportedEncoding {
            path: entry.path,
            encoding: entry.encoding,
        });
    }

    // the API wraps base64 content at 60 columns
    let encoded: String = entry
        .content
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let content = STANDARD
        .decode(encoded)
        .map_err(|e| ClusteradmError::Decode {
            path: entry.path.clone(),
            message: e.to_string(),
        })?;

    Ok(Resource::new(entry.path, content))
}
