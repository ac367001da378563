//! pkg-uses - show which packages use the given packages
//!
//! This library answers reverse dependency queries over a package universe:
//! given one or more target packages it finds every package whose dependency
//! edges include all of them, optionally transitively and filtered by
//! dependency kind, and renders the result as a flat list or as a
//! cycle-aware tree.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependents`): packages, edges, filter policy and the
//!   resolver, expander and tree builder services
//! - **Application Layer** (`application`): the find-dependents use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): package index reader, in-memory registry,
//!   formatters and console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkg_uses::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let index = FileSystemReader::new().read_package_index(Path::new("packages.toml"))?;
//! let registry = InMemoryRegistry::new(index.default_namespace, index.packages)?;
//!
//! let use_case = FindDependentsUseCase::new(registry, StderrProgressReporter::new());
//! let request = UsesRequest::builder().target("openssl@3").build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = ColumnsFormatter::new(None).format(&response)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependents;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{ColumnsFormatter, TreeFormatter};
    pub use crate::adapters::outbound::registry::InMemoryRegistry;
    pub use crate::application::dto::{OutputMode, UsesRequest, UsesResponse};
    pub use crate::application::use_cases::FindDependentsUseCase;
    pub use crate::dependents::domain::{
        Dependency, DependencyKind, DependentsTree, Package, PackageName, Target, TreeNode,
    };
    pub use crate::dependents::policies::{FilterPolicy, QueryMode, ResolutionStrategy};
    pub use crate::dependents::services::{
        DependentsResolver, DependentsTreeBuilder, NameMatcher, ResolveOptions,
        TransitiveExpander,
    };
    pub use crate::ports::outbound::{
        DependentsFormatter, OutputPresenter, PackageIndex, PackageRegistry, ProgressReporter,
        RegistryReader,
    };
    pub use crate::shared::error::{ExitCode, UsesError};
    pub use crate::shared::Result;
}
