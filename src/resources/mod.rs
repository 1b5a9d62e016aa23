//! Component resource discovery.
//!
//! Finds the yaml resources for deploying cluster API, infrastructure
//! providers and bootstrap providers. A component's repository may be a
//! local folder or file, a GitHub release asset, or a file or folder of a
//! GitHub source tree.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use clusteradm::resources::{lookup, CAPI};
//!
//! let bundle = lookup(CAPI, &HashMap::new(), None)?;
//! for resource in bundle.resources() {
//!     println!("{}", resource.path());
//! }
//! # Ok::<(), clusteradm::error::ClusteradmError>(())
//! ```

pub mod defaults;
pub mod github;
pub mod local;
pub mod location;
pub mod lookup;
pub mod resource;

pub use defaults::{default_components, default_repository, CAPI, DEFAULT_BOOTSTRAP};
pub use location::{GitHubMode, GitHubPath, Location, LocationKind};
pub use lookup::{effective_location, lookup, Resolver};
pub use resource::{ComponentResources, Resource};
