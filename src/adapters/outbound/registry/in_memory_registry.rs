use crate::dependents::domain::dependency::split_qualified;
use crate::dependents::domain::Package;
use crate::dependents::policies::FilterPolicy;
use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use std::collections::HashMap;

/// InMemoryRegistry adapter holding a whole package universe
///
/// Packages are kept sorted by full name, which is the pool order every
/// enumeration follows. The reverse-dependents index is computed once at
/// construction from installed packages and the default dependency kinds.
#[derive(Debug)]
pub struct InMemoryRegistry {
    default_namespace: String,
    packages: Vec<Package>,
    by_full_name: HashMap<String, usize>,
    by_name: HashMap<String, Vec<usize>>,
    reverse_index: HashMap<String, Vec<usize>>,
}

impl InMemoryRegistry {
    /// Creates a registry from a list of packages
    ///
    /// Packages declared in the default namespace are stored under their
    /// bare name.
    ///
    /// # Errors
    /// Returns an error if two packages share a full name
    pub fn new(default_namespace: impl Into<String>, packages: Vec<Package>) -> Result<Self> {
        let default_namespace = default_namespace.into();

        let mut packages = packages
            .into_iter()
            .map(|package| Self::normalize(&default_namespace, package))
            .collect::<Result<Vec<_>>>()?;
        packages.sort_by(|a, b| a.full_name().cmp(b.full_name()));

        let mut by_full_name = HashMap::with_capacity(packages.len());
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, package) in packages.iter().enumerate() {
            if by_full_name
                .insert(package.full_name().to_string(), index)
                .is_some()
            {
                anyhow::bail!(
                    "Duplicate package '{}' in package index",
                    package.full_name()
                );
            }
            by_name
                .entry(package.name().to_string())
                .or_default()
                .push(index);
        }

        let mut registry = Self {
            default_namespace,
            packages,
            by_full_name,
            by_name,
            reverse_index: HashMap::new(),
        };
        registry.reverse_index = registry.build_reverse_index();
        Ok(registry)
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn normalize(default_namespace: &str, package: Package) -> Result<Package> {
        match package.namespace() {
            Some(namespace) if namespace == default_namespace => Package::new(
                package.name().to_string(),
                package.dependencies().to_vec(),
                package.any_version_installed(),
            ),
            _ => Ok(package),
        }
    }

    /// Maps each package's full name to the installed packages whose
    /// default-kind edges match it
    fn build_reverse_index(&self) -> HashMap<String, Vec<usize>> {
        let policy = FilterPolicy::default();
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();

        for (dependent, package) in self.packages.iter().enumerate() {
            if !package.any_version_installed() {
                continue;
            }

            for dependency in package.dependencies() {
                if !policy.counts(dependency.kind()) {
                    continue;
                }

                let matched: Vec<usize> = if dependency.is_qualified() {
                    self.resolve_qualified_name(dependency.reference())
                        .and_then(|full_name| self.by_full_name.get(&full_name).copied())
                        .into_iter()
                        .collect()
                } else {
                    self.by_name
                        .get(dependency.reference())
                        .cloned()
                        .unwrap_or_default()
                };

                for target in matched {
                    let dependents = index
                        .entry(self.packages[target].full_name().to_string())
                        .or_default();
                    // Dependents are visited in pool order, so a repeat can only be the last entry
                    if dependents.last() != Some(&dependent) {
                        dependents.push(dependent);
                    }
                }
            }
        }

        index
    }
}

impl PackageRegistry for InMemoryRegistry {
    fn resolve(&self, name: &str) -> Option<&Package> {
        if split_qualified(name).is_some() {
            let full_name = self.resolve_qualified_name(name)?;
            return self
                .by_full_name
                .get(&full_name)
                .map(|&index| &self.packages[index]);
        }

        let candidates = self.by_name.get(name)?;
        candidates
            .iter()
            .map(|&index| &self.packages[index])
            .find(|package| package.namespace().is_none())
            .or_else(|| candidates.first().map(|&index| &self.packages[index]))
    }

    fn resolve_qualified_name(&self, reference: &str) -> Option<String> {
        let (namespace, name) = split_qualified(reference)?;
        let full_name = if namespace == self.default_namespace {
            name
        } else {
            reference
        };

        self.by_full_name
            .contains_key(full_name)
            .then(|| full_name.to_string())
    }

    fn reverse_dependents(&self, package: &Package) -> Option<Vec<&Package>> {
        if !self.by_full_name.contains_key(package.full_name()) {
            return None;
        }

        Some(
            self.reverse_index
                .get(package.full_name())
                .map(|indices| indices.iter().map(|&i| &self.packages[i]).collect())
                .unwrap_or_default(),
        )
    }

    fn all_packages(&self) -> Vec<&Package> {
        self.packages.iter().collect()
    }

    fn installed_packages(&self) -> Vec<&Package> {
        self.packages
            .iter()
            .filter(|package| package.any_version_installed())
            .collect()
    }
}
