//! Default repositories for the well known components.
//!
//! Used as a fallback when the user does not provide a repository for a
//! component. Every entry points at the latest release assets of the
//! component's GitHub repository.

/// Name of the cluster API component itself.
pub const CAPI: &str = "CAPI";

/// Bootstrap provider used when `--bootstrap` is given without a value.
pub const DEFAULT_BOOTSTRAP: &str = "kubeadm";

static DEFAULT_REPOSITORIES: &[(&str, &str)] = &[
    // cluster API default repository
    (
        CAPI,
        "https://github.com/kubernetes-sigs/cluster-api/releases/latest/cluster-api-components.yaml",
    ),
    // infrastructure providers
    (
        "aws",
        "https://github.com/kubernetes-sigs/cluster-api-provider-aws/releases/latest/infrastructure-components.yaml",
    ),
    (
        "vsphere",
        "https://github.com/kubernetes-sigs/cluster-api-provider-vsphere/releases/latest/infrastructure-components.yaml",
    ),
    // bootstrap providers
    (
        "kubeadm",
        "https://github.com/kubernetes-sigs/cluster-api-bootstrap-provider-kubeadm/releases/latest/bootstrap-components.yaml",
    ),
];

/// Get the default repository location for a component.
pub fn default_repository(component: &str) -> Option<&'static str> {
    DEFAULT_REPOSITORIES
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, location)| *location)
}

/// All components with a default repository, in registry order.
pub fn default_components() -> impl Iterator<Item = (&'static str, &'static str)> {
    DEFAULT_REPOSITORIES.iter().copied()
}
