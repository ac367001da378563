use super::{DependentsResolver, ResolveOptions};
use crate::dependents::domain::{DependentsTree, Target, TreeNode};
use crate::dependents::policies::ResolutionStrategy;
use crate::ports::outbound::PackageRegistry;
use std::collections::HashSet;

/// Names of the frontiers currently being expanded, one set per tree depth
///
/// Created fresh for every tree and threaded through the recursion.
#[derive(Debug, Default)]
pub struct AncestorStack {
    frames: Vec<HashSet<String>>,
}

impl AncestorStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, names: HashSet<String>) {
        self.frames.push(names);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains(name))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// DependentsTreeBuilder service building the nested view of dependents
///
/// Each level holds the direct dependents of the level above it. A
/// dependent whose name is already on the ancestor path is marked circular
/// and not expanded, so cyclic graphs terminate.
pub struct DependentsTreeBuilder;

impl DependentsTreeBuilder {
    /// Builds the dependents tree for the targets
    ///
    /// # Arguments
    /// * `registry` - Package registry
    /// * `targets` - Query targets; they become the roots, sorted by name
    /// * `options` - `recursive` controls whether levels below the first are
    ///   built; each level is always resolved one edge deep
    pub fn build<R: PackageRegistry + ?Sized>(
        registry: &R,
        targets: &[Target<'_>],
        options: &ResolveOptions,
    ) -> DependentsTree {
        let mut roots = targets.to_vec();
        roots.sort_by(|a, b| a.name().cmp(b.name()));

        let mut ancestors = AncestorStack::new();
        let dependents = Self::build_level(registry, &roots, options, &mut ancestors);

        let root_names = roots.iter().map(|t| t.full_name().to_string()).collect();
        DependentsTree::new(root_names, dependents)
    }

    fn build_level<R: PackageRegistry + ?Sized>(
        registry: &R,
        frontier: &[Target<'_>],
        options: &ResolveOptions,
        ancestors: &mut AncestorStack,
    ) -> Vec<TreeNode> {
        let level_options = ResolveOptions {
            recursive: false,
            ..*options
        };
        let dependents = DependentsResolver::resolve(
            registry,
            frontier,
            &level_options,
            ResolutionStrategy::FullScan,
        );

        ancestors.push(frontier.iter().map(|t| t.name().to_string()).collect());

        let mut nodes = Vec::with_capacity(dependents.len());
        for dependent in dependents {
            let name = dependent.name().to_string();
            let full_name = dependent.full_name().to_string();

            if ancestors.contains(&name) {
                nodes.push(TreeNode::circular(name, full_name));
                continue;
            }

            let children = if options.recursive {
                Self::build_level(registry, &[Target::Resolved(dependent)], options, ancestors)
            } else {
                Vec::new()
            };
            nodes.push(TreeNode::new(name, full_name, children));
        }

        ancestors.pop();
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::registry::InMemoryRegistry;
    use crate::dependents::domain::{Dependency, DependencyKind, Package};

    fn pkg(name: &str, deps: &[&str]) -> Package {
        Package::new(
            name.to_string(),
            deps.iter()
                .map(|d| Dependency::new(*d, DependencyKind::Required))
                .collect(),
            true,
        )
        .unwrap()
    }

    fn child_names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.full_name()).collect()
    }

    fn recursive() -> ResolveOptions {
        ResolveOptions {
            recursive: true,
            ..ResolveOptions::default()
        }
    }

    #[test]
    fn test_ancestor_stack_push_pop() {
        let mut stack = AncestorStack::new();
        stack.push(["a".to_string()].into_iter().collect());
        stack.push(["b".to_string()].into_iter().collect());
        assert!(stack.contains("a"));
        assert!(stack.contains("b"));
        assert_eq!(stack.depth(), 2);

        stack.pop();
        assert!(!stack.contains("b"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_cycle_is_marked_and_not_descended() {
        let registry = InMemoryRegistry::new(
            "homebrew/core",
            vec![pkg("a", &["b"]), pkg("b", &["a"]), pkg("c", &["a"])],
        )
        .unwrap();
        let a = registry.resolve("a").unwrap();

        let tree = DependentsTreeBuilder::build(&registry, &[Target::Resolved(a)], &recursive());

        assert_eq!(tree.roots(), &["a".to_string()]);
        assert_eq!(child_names(tree.dependents()), vec!["b", "c"]);

        let b = &tree.dependents()[0];
        assert!(!b.is_circular());
        assert_eq!(child_names(b.children()), vec!["a"]);
        assert!(b.children()[0].is_circular());
        assert!(b.children()[0].children().is_empty());

        let c = &tree.dependents()[1];
        assert!(c.children().is_empty());
        assert_eq!(tree.circular_count(), 1);
    }

    #[test]
    fn test_non_recursive_tree_stops_at_first_level() {
        let registry = InMemoryRegistry::new(
            "homebrew/core",
            vec![pkg("x", &["y"]), pkg("y", &["z"]), pkg("z", &[])],
        )
        .unwrap();
        let z = registry.resolve("z").unwrap();

        let tree = DependentsTreeBuilder::build(
            &registry,
            &[Target::Resolved(z)],
            &ResolveOptions::default(),
        );

        assert_eq!(child_names(tree.dependents()), vec!["y"]);
        assert!(tree.dependents()[0].children().is_empty());
    }

    #[test]
    fn test_recursive_tree_expands_one_edge_per_level() {
        let registry = InMemoryRegistry::new(
            "homebrew/core",
            vec![pkg("x", &["y"]), pkg("y", &["z"]), pkg("z", &[])],
        )
        .unwrap();
        let z = registry.resolve("z").unwrap();

        let tree = DependentsTreeBuilder::build(&registry, &[Target::Resolved(z)], &recursive());

        assert_eq!(child_names(tree.dependents()), vec!["y"]);
        let y = &tree.dependents()[0];
        assert_eq!(child_names(y.children()), vec!["x"]);
        assert!(y.children()[0].children().is_empty());
    }

    #[test]
    fn test_roots_are_sorted_and_first_level_intersects() {
        let registry = InMemoryRegistry::new(
            "homebrew/core",
            vec![
                pkg("foo", &[]),
                pkg("bar", &[]),
                pkg("both", &["foo", "bar"]),
                pkg("only-foo", &["foo"]),
            ],
        )
        .unwrap();
        let foo = registry.resolve("foo").unwrap();
        let bar = registry.resolve("bar").unwrap();

        let tree = DependentsTreeBuilder::build(
            &registry,
            &[Target::Resolved(foo), Target::Resolved(bar)],
            &ResolveOptions::default(),
        );

        assert_eq!(tree.roots(), &["bar".to_string(), "foo".to_string()]);
        assert_eq!(child_names(tree.dependents()), vec!["both"]);
    }

    #[test]
    fn test_repeated_builds_do_not_share_state() {
        let registry = InMemoryRegistry::new(
            "homebrew/core",
            vec![pkg("a", &["b"]), pkg("b", &["a"])],
        )
        .unwrap();
        let a = registry.resolve("a").unwrap();

        let first = DependentsTreeBuilder::build(&registry, &[Target::Resolved(a)], &recursive());
        let second = DependentsTreeBuilder::build(&registry, &[Target::Resolved(a)], &recursive());
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_root() {
        let registry =
            InMemoryRegistry::new("homebrew/core", vec![pkg("r", &["ghost"])]).unwrap();

        let tree = DependentsTreeBuilder::build(
            &registry,
            &[Target::Placeholder("ghost".to_string())],
            &recursive(),
        );

        assert_eq!(tree.roots(), &["ghost".to_string()]);
        assert_eq!(child_names(tree.dependents()), vec!["r"]);
    }
}
