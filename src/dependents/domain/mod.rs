pub mod dependency;
pub mod dependents_tree;
pub mod package;
pub mod target;

pub use dependency::{Dependency, DependencyKind};
pub use dependents_tree::{DependentsTree, TreeNode};
pub use package::{Package, PackageName};
pub use target::Target;
