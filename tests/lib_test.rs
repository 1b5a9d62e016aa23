//! Library integration tests.

use clusteradm::ClusteradmError;

#[test]
fn error_types_are_public() {
    let err = ClusteradmError::MissingRepository {
        component: "docker".into(),
    };
    assert!(err.to_string().contains("docker"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> clusteradm::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn component_errors_keep_their_cause() {
    use std::error::Error;

    let err = ClusteradmError::RateLimitExceeded.for_component("CAPI");
    assert!(err.to_string().starts_with("failed to get resources for \"CAPI\""));
    assert!(err.source().unwrap().to_string().contains("CLUSTERADM_GITHUB_TOKEN"));
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use clusteradm::cli::{Cli, Commands};

    let cli = Cli::parse_from(["clusteradm", "init", "--providers", "aws", "--bootstrap"]);

    if let Commands::Init(args) = cli.command {
        assert_eq!(args.providers, vec!["aws"]);
        assert_eq!(args.bootstrap.as_deref(), Some("kubeadm"));
    } else {
        panic!("Expected Init command");
    }
}

#[test]
fn location_types_are_public() {
    use clusteradm::resources::{GitHubMode, Location, LocationKind};

    let location = Location::parse(
        "CAPI",
        "https://github.com/kubernetes-sigs/cluster-api/releases/latest/cluster-api-components.yaml",
    )
    .unwrap();
    match location.kind {
        LocationKind::GitHubRelease(path) => {
            assert_eq!(path.mode, GitHubMode::Releases);
            assert_eq!(path.reference, "latest");
            assert_eq!(path.resource_path, "cluster-api-components.yaml");
        }
        other => panic!("Expected GitHub release location, got {:?}", other),
    }
}

#[test]
fn config_types_are_public() {
    use clusteradm::config::load_config;

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.yml");
    std::fs::write(&path, "providers: [aws]\n").unwrap();

    let config = load_config(temp.path(), Some(&path)).unwrap();
    assert_eq!(config.providers, vec!["aws"]);
}
