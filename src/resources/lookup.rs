//! Component resource lookup.
//!
//! Resolution order for a component's repository (first match wins):
//! 1. User provided override
//! 2. Built-in default repository
//!
//! The effective location is then classified and routed to the local or
//! GitHub resolver.

use std::collections::HashMap;

use crate::error::{ClusteradmError, Result};
use crate::resources::defaults::default_repository;
use crate::resources::github::{self, GitHubClient, GitHubRepository};
use crate::resources::local;
use crate::resources::location::{GitHubPath, Location, LocationKind};
use crate::resources::resource::{ComponentResources, Resource};

/// Routes component lookups to the matching repository resolver.
#[derive(Debug, Clone)]
pub struct Resolver {
    api_url: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver talking to the public GitHub API.
    pub fn new() -> Self {
        Self {
            api_url: github::DEFAULT_API_URL.to_string(),
        }
    }

    /// Use a different GitHub API endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Get the resources for `component`.
    ///
    /// `overrides` maps component names to repository locations and takes
    /// precedence over the built-in defaults. `token` is only used for
    /// GitHub repositories.
    ///
    /// # Errors
    ///
    /// Returns `MissingRepository` without any I/O when the component has no
    /// repository, otherwise any location or resolver error.
    pub fn lookup(
        &self,
        component: &str,
        overrides: &HashMap<String, String>,
        token: Option<&str>,
    ) -> Result<ComponentResources> {
        let raw = effective_location(component, overrides).ok_or_else(|| {
            ClusteradmError::MissingRepository {
                component: component.to_string(),
            }
        })?;
        tracing::debug!("Repository for {:?} is {}", component, raw);

        let location = Location::parse(component, raw)?;
        let resources = match &location.kind {
            LocationKind::GitHubRelease(path) | LocationKind::GitHubTree(path) => {
                self.github(path, token)?
            }
            LocationKind::Local(path) => local::resolve(path)?,
            LocationKind::UnsupportedHttp(_) => {
                return Err(ClusteradmError::UnsupportedLocation {
                    message: "http/https repositories not implemented".to_string(),
                })
            }
        };

        let component_resources = ComponentResources::new(resources, location.apply);
        if let Some(apply) = component_resources.apply() {
            if component_resources.apply_resource().is_none() {
                tracing::warn!(
                    "apply path {:?} for {:?} does not match any resource",
                    apply,
                    component
                );
            }
        }

        Ok(component_resources)
    }

    fn github(&self, path: &GitHubPath, token: Option<&str>) -> Result<Vec<Resource>> {
        let client = GitHubClient::new(&self.api_url, token).map_err(|e| {
            ClusteradmError::GitHubApi {
                context: "failed to create github client".to_string(),
                source: e,
            }
        })?;
        GitHubRepository::new(&path.owner, &path.repo, client).resources(path)
    }
}

/// The repository location for `component`: its override if present,
/// else its default.
pub fn effective_location<'a>(
    component: &str,
    overrides: &'a HashMap<String, String>,
) -> Option<&'a str> {
    overrides
        .get(component)
        .map(String::as_str)
        .or_else(|| default_repository(component))
}

/// Get the resources for `component` using the public GitHub API.
pub fn lookup(
    component: &str,
    overrides: &HashMap<String, String>,
    token: Option<&str>,
) -> Result<ComponentResources> {
    Resolver::new().lookup(component, overrides, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::defaults::CAPI;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn overrides(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unknown_component_is_missing_repository() {
        let server = MockServer::start();
        let any = server.mock(|when, then| {
            when.method(GET);
            then.status(500);
        });

        let err = Resolver::new()
            .with_api_url(server.base_url())
            .lookup("docker", &HashMap::new(), None)
            .unwrap_err();

        match err {
            ClusteradmError::MissingRepository { component } => assert_eq!(component, "docker"),
            other => panic!("Expected MissingRepository, got {:?}", other),
        }
        any.assert_calls(0);
    }

    #[test]
    fn override_wins_over_default() {
        let map = overrides(&[(CAPI, "/opt/capi")]);
        assert_eq!(effective_location(CAPI, &map), Some("/opt/capi"));
        assert!(effective_location(CAPI, &HashMap::new())
            .unwrap()
            .contains("kubernetes-sigs/cluster-api"));
        assert_eq!(effective_location("docker", &HashMap::new()), None);
    }

    #[test]
    fn local_override_end_to_end() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docker");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("infrastructure-components.yaml"), "kind: A").unwrap();

        let location = format!("{}#docker/infrastructure-components.yaml", root.display());
        let bundle = lookup("docker", &overrides(&[("docker", &location)]), None).unwrap();

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.resources()[0].path(), "docker/infrastructure-components.yaml");
        assert_eq!(bundle.apply(), Some("docker/infrastructure-components.yaml"));
        assert!(bundle.apply_resource().is_some());
    }

    #[test]
    fn unmatched_apply_hint_is_kept() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docker");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.yaml"), "kind: A").unwrap();

        let location = format!("{}#missing.yaml", root.display());
        let bundle = lookup("docker", &overrides(&[("docker", &location)]), None).unwrap();

        assert_eq!(bundle.apply(), Some("missing.yaml"));
        assert!(bundle.apply_resource().is_none());
    }

    #[test]
    fn generic_http_is_unsupported() {
        let map = overrides(&[("aws", "https://example.com/aws.yaml")]);
        let err = lookup("aws", &map, None).unwrap_err();
        match err {
            ClusteradmError::UnsupportedLocation { message } => {
                assert_eq!(message, "http/https repositories not implemented");
            }
            other => panic!("Expected UnsupportedLocation, got {:?}", other),
        }
    }

    #[test]
    fn invalid_url_names_component() {
        let map = overrides(&[("aws", "https://[::1")]);
        let err = lookup("aws", &map, None).unwrap_err();
        assert!(matches!(err, ClusteradmError::InvalidRepositoryUrl { .. }));
    }

    #[test]
    fn capi_default_resolves_latest_release_asset() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/repos/kubernetes-sigs/cluster-api/releases");
            then.status(200).json_body(json!([
                {"tag_name": "v0.1.0", "assets": []},
                {"tag_name": "v0.1.2", "assets": [{"id": 5, "name": "cluster-api-components.yaml"}]}
            ]));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/repos/kubernetes-sigs/cluster-api/releases/assets/5");
            then.status(200).body("kind: CustomResourceDefinition");
        });

        let bundle = Resolver::new()
            .with_api_url(server.base_url())
            .lookup(CAPI, &HashMap::new(), None)
            .unwrap();

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.resources()[0].path(), "cluster-api-components.yaml");
        assert_eq!(bundle.apply(), None);
    }

    #[test]
    fn github_tree_override_keeps_fragment() {
        let server = MockServer::start();
        let sha = "fedcba9876543210fedcba9876543210fedcba98";
        server.mock(|when, then| {
            when.method(GET)
                .path("/repos/org/provider/contents/config/default/kustomization.yaml")
                .query_param("ref", sha);
            then.status(200).json_body(json!({
                "type": "file",
                "encoding": "base64",
                "path": "config/default/kustomization.yaml",
                "content": "a2luZDogS3VzdG9taXphdGlvbg=="
            }));
        });

        let location = format!(
            "https://github.com/org/provider/tree/{}/config/default/kustomization.yaml#config/default/kustomization.yaml",
            sha
        );
        let bundle = Resolver::new()
            .with_api_url(server.base_url())
            .lookup("provider", &overrides(&[("provider", &location)]), Some("token"))
            .unwrap();

        assert_eq!(bundle.resources()[0].content(), b"kind: Kustomization");
        assert_eq!(
            bundle.apply_resource().map(Resource::path),
            Some("config/default/kustomization.yaml")
        );
    }
}
