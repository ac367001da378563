use crate::dependents::domain::Package;
use crate::shared::Result;
use std::path::Path;

/// Namespace whose packages carry bare full names unless the index overrides it
pub const DEFAULT_NAMESPACE: &str = "homebrew/core";

/// Parsed contents of a package index file
#[derive(Debug, Clone)]
pub struct PackageIndex {
    pub default_namespace: String,
    pub packages: Vec<Package>,
}

/// RegistryReader port for loading the package universe
///
/// This port abstracts the storage that package definitions come from.
pub trait RegistryReader {
    /// Reads and parses a package index
    ///
    /// # Arguments
    /// * `index_path` - Path to the package index file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read or fails the security checks
    /// - The contents are not a valid package index
    fn read_package_index(&self, index_path: &Path) -> Result<PackageIndex>;
}
