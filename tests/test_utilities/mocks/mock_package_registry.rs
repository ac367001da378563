use pkg_uses::prelude::*;
use std::collections::HashMap;

/// Mock PackageRegistry whose reverse index is set by hand
///
/// Wraps an [`InMemoryRegistry`] for everything except
/// `reverse_dependents`, so tests can simulate a stale or missing index.
pub struct MockPackageRegistry {
    inner: InMemoryRegistry,
    reverse_index: Option<HashMap<String, Vec<String>>>,
}

impl MockPackageRegistry {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            inner: InMemoryRegistry::new("homebrew/core", packages).unwrap(),
            reverse_index: Some(HashMap::new()),
        }
    }

    /// Removes the reverse index entirely
    pub fn without_reverse_index(mut self) -> Self {
        self.reverse_index = None;
        self
    }

    /// Sets the reverse index entry of `package` to `dependents`
    pub fn with_reverse_dependents(mut self, package: &str, dependents: &[&str]) -> Self {
        self.reverse_index.get_or_insert_with(HashMap::new).insert(
            package.to_string(),
            dependents.iter().map(|d| d.to_string()).collect(),
        );
        self
    }
}

impl PackageRegistry for MockPackageRegistry {
    fn resolve(&self, name: &str) -> Option<&Package> {
        self.inner.resolve(name)
    }

    fn resolve_qualified_name(&self, reference: &str) -> Option<String> {
        self.inner.resolve_qualified_name(reference)
    }

    fn reverse_dependents(&self, package: &Package) -> Option<Vec<&Package>> {
        let index = self.reverse_index.as_ref()?;
        let dependents = index.get(package.full_name())?;
        Some(
            dependents
                .iter()
                .filter_map(|name| self.inner.resolve(name))
                .collect(),
        )
    }

    fn all_packages(&self) -> Vec<&Package> {
        self.inner.all_packages()
    }

    fn installed_packages(&self) -> Vec<&Package> {
        self.inner.installed_packages()
    }
}
