mod dependents_resolver;
mod name_matcher;
mod transitive_expander;
mod tree_builder;

pub use dependents_resolver::{DependentsResolver, ResolveOptions};
pub use name_matcher::NameMatcher;
pub use transitive_expander::{ExpandedDependencies, TransitiveExpander};
pub use tree_builder::{AncestorStack, DependentsTreeBuilder};
