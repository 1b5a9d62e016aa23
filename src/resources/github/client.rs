//! Blocking GitHub REST API client.
//!
//! Wraps the handful of endpoints used for resource discovery: releases,
//! release assets, branches, tags and repository contents. List endpoints
//! are read page by page until a short page is returned.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, LOCATION};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::types::{AssetDownload, Contents, NamedRef, Release};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PER_PAGE: usize = 100;
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const BINARY_MEDIA_TYPE: &str = "application/octet-stream";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Failure talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubApiError {
    /// The primary or secondary rate limit was hit.
    #[error("API rate limit exceeded")]
    RateLimited,

    /// The requested object does not exist.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Any other non-success response.
    #[error("HTTP {status} from {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// The API URL could not be built.
    #[error("invalid API url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// The response body could not be parsed.
    #[error("failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Connection or protocol failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Error body returned by the API.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Client for a single GitHub API endpoint.
#[derive(Debug)]
pub struct GitHubClient {
    /// Client used for API calls and plain downloads.
    client: Client,
    /// Client that reports redirects instead of following them.
    asset_client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for `api_url`.
    ///
    /// An empty or missing `token` means anonymous access, which is subject
    /// to a much lower rate limit. Every request times out after 30 seconds.
    pub fn new(api_url: impl Into<String>, token: Option<&str>) -> Result<Self, GitHubApiError> {
        let client = Client::builder()
            .user_agent("clusteradm")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let asset_client = Client::builder()
            .user_agent("clusteradm")
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            asset_client,
            api_url: api_url.into(),
            token: token.filter(|t| !t.is_empty()).map(String::from),
        })
    }

    /// List all releases of a repository.
    pub fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, GitHubApiError> {
        self.get_paginated(&["repos", owner, repo, "releases"])
    }

    /// Get the release created from `tag`.
    pub fn release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Release, GitHubApiError> {
        let url = self.endpoint(&["repos", owner, repo, "releases", "tags", tag])?;
        self.get_json(url)
    }

    /// Request a release asset download.
    ///
    /// GitHub either streams the asset or redirects to a download location;
    /// both outcomes are reported without following the redirect.
    pub fn download_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> Result<AssetDownload, GitHubApiError> {
        let id = asset_id.to_string();
        let url = self.endpoint(&["repos", owner, repo, "releases", "assets", &id])?;
        tracing::debug!("GET {}", url);

        let response = self
            .authorized(self.asset_client.get(url))
            .header(ACCEPT, BINARY_MEDIA_TYPE)
            .send()?;

        if response.status().is_redirection() {
            let location = redirect_location(&response)?;
            return Ok(AssetDownload::Redirect(location));
        }

        let response = check_status(response)?;
        Ok(AssetDownload::Content(response.bytes()?.to_vec()))
    }

    /// Plain unauthenticated GET of an arbitrary URL, returning the body.
    pub fn download(&self, url: &str) -> Result<Vec<u8>, GitHubApiError> {
        tracing::debug!("GET {}", url);
        let response = check_status(self.client.get(url).send()?)?;
        Ok(response.bytes()?.to_vec())
    }

    /// List all branches of a repository.
    pub fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<NamedRef>, GitHubApiError> {
        self.get_paginated(&["repos", owner, repo, "branches"])
    }

    /// List all tags of a repository.
    pub fn list_tags(&self, owner: &str, repo: &str) -> Result<Vec<NamedRef>, GitHubApiError> {
        self.get_paginated(&["repos", owner, repo, "tags"])
    }

    /// Get the file or folder at `path` as of commit `sha`.
    pub fn contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        sha: &str,
    ) -> Result<Contents, GitHubApiError> {
        let mut segments = vec!["repos", owner, repo, "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));

        let mut url = self.endpoint(&segments)?;
        url.query_pairs_mut().append_pair("ref", sha);
        self.get_json(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubApiError> {
        let invalid = |message: String| GitHubApiError::InvalidUrl {
            url: self.api_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GitHubApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .authorized(self.client.get(url.clone()))
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()?;

        check_status(response)?
            .json()
            .map_err(|e| GitHubApiError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn get_paginated<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Vec<T>, GitHubApiError> {
        let mut items = Vec::new();

        for page in 1u32.. {
            let mut url = self.endpoint(segments)?;
            url.query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let batch: Vec<T> = self.get_json(url)?;
            let last = batch.len() < PER_PAGE;
            items.extend(batch);
            if last {
                break;
            }
        }

        Ok(items)
    }
}

/// Map non-success responses to errors, detecting rate limiting first.
fn check_status(response: Response) -> Result<Response, GitHubApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if is_rate_limited(&response) {
        return Err(GitHubApiError::RateLimited);
    }

    let url = response.url().to_string();
    if status == StatusCode::NOT_FOUND {
        return Err(GitHubApiError::NotFound { url });
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    Err(GitHubApiError::Status {
        status: status.as_u16(),
        url,
        message,
    })
}

fn is_rate_limited(response: &Response) -> bool {
    let remaining = response
        .headers()
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok());

    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => true,
        StatusCode::FORBIDDEN => remaining == Some("0"),
        _ => false,
    }
}

fn redirect_location(response: &Response) -> Result<String, GitHubApiError> {
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| GitHubApiError::Status {
            status: response.status().as_u16(),
            url: response.url().to_string(),
            message: "redirect without a location".to_string(),
        })?;

    response
        .url()
        .join(location)
        .map(String::from)
        .map_err(|e| GitHubApiError::InvalidUrl {
            url: location.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer, token: Option<&str>) -> GitHubClient {
        GitHubClient::new(server.base_url(), token).unwrap()
    }

    #[test]
    fn empty_token_is_anonymous() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/releases/tags/v1.0.0")
                .header_missing("Authorization");
            then.status(200)
                .json_body(json!({"tag_name": "v1.0.0", "assets": []}));
        });

        client(&server, Some(""))
            .release_by_tag("org", "repo", "v1.0.0")
            .unwrap();
        client(&server, None)
            .release_by_tag("org", "repo", "v1.0.0")
            .unwrap();

        mock.assert_calls(2);
    }

    #[test]
    fn sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/releases/tags/v1.0.0")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .json_body(json!({"tag_name": "v1.0.0", "assets": []}));
        });

        let release = client(&server, Some("secret-token"))
            .release_by_tag("org", "repo", "v1.0.0")
            .unwrap();

        assert_eq!(release.tag(), "v1.0.0");
        mock.assert();
    }

    #[test]
    fn reads_all_pages() {
        let server = MockServer::start();
        let full_page: Vec<_> = (0..PER_PAGE)
            .map(|i| json!({"name": format!("b{}", i), "commit": {"sha": "x"}}))
            .collect();

        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/branches")
                .query_param("page", "1");
            then.status(200).json_body(json!(full_page));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/branches")
                .query_param("page", "2");
            then.status(200)
                .json_body(json!([{"name": "main", "commit": {"sha": "abc"}}]));
        });

        let branches = client(&server, None).list_branches("org", "repo").unwrap();

        assert_eq!(branches.len(), PER_PAGE + 1);
        assert_eq!(branches[PER_PAGE].name, "main");
        first.assert_calls(1);
        second.assert_calls(1);
    }

    #[test]
    fn forbidden_with_no_remaining_calls_is_rate_limited() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/org/repo/tags");
            then.status(403)
                .header("x-ratelimit-remaining", "0")
                .json_body(json!({"message": "API rate limit exceeded"}));
        });

        let err = client(&server, None).list_tags("org", "repo").unwrap_err();
        assert!(matches!(err, GitHubApiError::RateLimited));
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/org/repo/releases");
            then.status(429);
        });

        let err = client(&server, None).list_releases("org", "repo").unwrap_err();
        assert!(matches!(err, GitHubApiError::RateLimited));
    }

    #[test]
    fn plain_forbidden_is_a_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/org/repo/releases");
            then.status(403)
                .header("x-ratelimit-remaining", "42")
                .json_body(json!({"message": "Resource not accessible"}));
        });

        let err = client(&server, None).list_releases("org", "repo").unwrap_err();
        match err {
            GitHubApiError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Resource not accessible");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[test]
    fn missing_release_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/org/repo/releases/tags/v9.9.9");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let err = client(&server, None)
            .release_by_tag("org", "repo", "v9.9.9")
            .unwrap_err();
        assert!(matches!(err, GitHubApiError::NotFound { .. }));
    }

    #[test]
    fn asset_download_returns_inline_content() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/releases/assets/7")
                .header("Accept", "application/octet-stream");
            then.status(200).body("kind: Namespace");
        });

        let download = client(&server, None).download_asset("org", "repo", 7).unwrap();

        assert_eq!(download, AssetDownload::Content(b"kind: Namespace".to_vec()));
        mock.assert();
    }

    #[test]
    fn asset_download_reports_redirect() {
        let server = MockServer::start();
        let cdn = server.url("/cdn/infra.yaml");
        server.mock(|when, then| {
            when.method(GET).path("/repos/org/repo/releases/assets/7");
            then.status(302).header("Location", cdn.as_str());
        });

        let download = client(&server, None).download_asset("org", "repo", 7).unwrap();

        assert_eq!(download, AssetDownload::Redirect(cdn));
    }

    #[test]
    fn contents_are_requested_at_ref() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/repo/contents/config/default")
                .query_param("ref", "abc123");
            then.status(200).json_body(json!([]));
        });

        let contents = client(&server, None)
            .contents("org", "repo", "config/default", "abc123")
            .unwrap();

        assert!(matches!(contents, Contents::Directory(ref e) if e.is_empty()));
        mock.assert();
    }

    #[test]
    fn download_reads_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/cdn/a.yaml");
            then.status(200).body("a: 1");
        });

        let body = client(&server, None)
            .download(&server.url("/cdn/a.yaml"))
            .unwrap();
        assert_eq!(body, b"a: 1");
    }

    #[test]
    fn invalid_api_url_is_reported() {
        let client = GitHubClient::new("not a url", None).unwrap();
        let err = client.list_releases("org", "repo").unwrap_err();
        assert!(matches!(err, GitHubApiError::InvalidUrl { .. }));
    }
}
