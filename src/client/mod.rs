//! High level clusteradm operations.

mod init;

pub use init::InitConfig;

use crate::resources::Resolver;

/// Entry point for management cluster operations.
#[derive(Debug, Clone, Default)]
pub struct ClusteradmClient {
    resolver: Resolver,
}

impl ClusteradmClient {
    /// Create a client that resolves resources from the public GitHub API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a custom resolver.
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// The resolver used for component lookups.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}
