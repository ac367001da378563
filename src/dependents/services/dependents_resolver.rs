use super::{NameMatcher, TransitiveExpander};
use crate::dependents::domain::{Package, Target};
use crate::dependents::policies::{FilterPolicy, ResolutionStrategy};
use crate::ports::outbound::PackageRegistry;
use std::collections::HashSet;
use tracing::debug;

/// Options for a single resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub recursive: bool,
    pub installed_only: bool,
    pub policy: FilterPolicy,
}

/// DependentsResolver service finding the packages that use every target
///
/// This is the intersection engine: a candidate is kept only if each target
/// matches at least one of its expanded dependency edges. The result keeps
/// pool order and holds each package once.
pub struct DependentsResolver;

impl DependentsResolver {
    pub fn resolve<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        targets: &[Target<'_>],
        options: &ResolveOptions,
        strategy: ResolutionStrategy,
    ) -> Vec<&'r Package> {
        Self::resolve_with_progress(registry, targets, options, strategy, &mut |_, _| {})
    }

    /// Same as [`DependentsResolver::resolve`], reporting `(checked, total)`
    /// while scanning the candidate pool
    pub fn resolve_with_progress<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        targets: &[Target<'_>],
        options: &ResolveOptions,
        strategy: ResolutionStrategy,
        on_progress: &mut dyn FnMut(usize, usize),
    ) -> Vec<&'r Package> {
        if targets.is_empty() {
            return Vec::new();
        }

        if strategy == ResolutionStrategy::ReverseIndex {
            if let Some(found) = Self::via_reverse_index(registry, targets) {
                return found;
            }
            debug!("reverse index unavailable for a target, falling back to a full scan");
        }

        Self::via_full_scan(registry, targets, options, on_progress)
    }

    /// Intersects the reverse-dependents indexes of all targets
    ///
    /// Returns None if a target is a placeholder or has no index.
    fn via_reverse_index<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        targets: &[Target<'_>],
    ) -> Option<Vec<&'r Package>> {
        let mut indexes = Vec::with_capacity(targets.len());
        for target in targets {
            let package = target.package()?;
            indexes.push(registry.reverse_dependents(package)?);
        }

        let (first, rest) = indexes.split_first()?;
        let rest: Vec<HashSet<&str>> = rest
            .iter()
            .map(|index| index.iter().map(|p| p.full_name()).collect())
            .collect();

        let mut seen = HashSet::new();
        let found = first
            .iter()
            .copied()
            .filter(|candidate| rest.iter().all(|index| index.contains(candidate.full_name())))
            // The index may be stale
            .filter(|candidate| candidate.any_version_installed())
            .filter(|candidate| seen.insert(candidate.full_name()))
            .collect();

        Some(found)
    }

    fn via_full_scan<'r, R: PackageRegistry + ?Sized>(
        registry: &'r R,
        targets: &[Target<'_>],
        options: &ResolveOptions,
        on_progress: &mut dyn FnMut(usize, usize),
    ) -> Vec<&'r Package> {
        let pool = if options.installed_only {
            registry.installed_packages()
        } else {
            registry.all_packages()
        };
        let total = pool.len();

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for (checked, candidate) in pool.into_iter().enumerate() {
            on_progress(checked + 1, total);

            if !seen.insert(candidate.full_name()) {
                continue;
            }

            let expanded = TransitiveExpander::expand(
                registry,
                candidate,
                &options.policy,
                options.recursive,
            );
            let uses_all = targets.iter().all(|target| {
                expanded
                    .iter()
                    .any(|dependency| NameMatcher::matches(registry, dependency, target))
            });

            if uses_all {
                found.push(candidate);
            }
        }

        found
    }
}
