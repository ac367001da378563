use crate::dependents::domain::{Dependency, DependencyKind, Package};
use crate::dependents::policies::FilterPolicy;
use crate::ports::outbound::PackageRegistry;
use std::collections::HashSet;

/// Dependency edges that count for a package, without duplicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedDependencies {
    edges: Vec<Dependency>,
}

impl ExpandedDependencies {
    pub fn edges(&self) -> &[Dependency] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Identity of an edge after resolution: qualified references that resolve
/// collapse onto their canonical full name
#[derive(Debug, PartialEq, Eq, Hash)]
struct EdgeKey {
    identity: String,
    kind: DependencyKind,
}

/// TransitiveExpander service computing the edges of a package that count
/// under a FilterPolicy
///
/// The policy is applied at every hop: an edge that does not count is
/// neither returned nor followed.
pub struct TransitiveExpander;

impl TransitiveExpander {
    /// Expands the dependency edges of `package`
    ///
    /// # Arguments
    /// * `registry` - Registry used to resolve referenced packages
    /// * `package` - The package to expand
    /// * `policy` - Which dependency kinds count
    /// * `recursive` - Follow edges into the referenced packages
    ///
    /// # Returns
    /// The package's own counted edges, or the transitive closure when
    /// `recursive` is set
    pub fn expand<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        package: &'r Package,
        policy: &FilterPolicy,
        recursive: bool,
    ) -> ExpandedDependencies {
        let mut edges = Vec::new();
        let mut seen_edges: HashSet<EdgeKey> = HashSet::new();
        let mut visited: HashSet<&'r str> = HashSet::new();
        let mut pending: Vec<&'r Package> = vec![package];
        visited.insert(package.full_name());

        while let Some(current) = pending.pop() {
            for dependency in current.dependencies() {
                if !policy.counts(dependency.kind()) {
                    continue;
                }

                let resolved = Self::resolve_dependency(registry, dependency);
                let key = EdgeKey {
                    identity: Self::edge_identity(registry, dependency),
                    kind: dependency.kind(),
                };
                if seen_edges.insert(key) {
                    edges.push(dependency.clone());
                }

                if !recursive {
                    continue;
                }
                // Unresolvable references are kept as edges but cannot be walked
                if let Some(next) = resolved {
                    if visited.insert(next.full_name()) {
                        pending.push(next);
                    }
                }
            }
        }

        ExpandedDependencies { edges }
    }

    fn resolve_dependency<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        dependency: &Dependency,
    ) -> Option<&'r Package> {
        if dependency.is_qualified() {
            let full_name = registry.resolve_qualified_name(dependency.reference())?;
            return registry.resolve(&full_name);
        }
        registry.resolve(dependency.reference())
    }

    fn edge_identity<R: PackageRegistry + ?Sized>(registry: &R, dependency: &Dependency) -> String {
        if dependency.is_qualified() {
            if let Some(full_name) = registry.resolve_qualified_name(dependency.reference()) {
                return full_name;
            }
        }
        dependency.reference().to_string()
    }
}
