use crate::dependents::domain::DependentsTree;
use crate::dependents::policies::ResolutionStrategy;

/// UsesResponse - Internal response DTO from the find-dependents use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsesResponse {
    /// Full names of the dependents, sorted (flat mode only)
    pub dependents: Vec<String>,
    /// Dependents tree (tree mode only)
    pub tree: Option<DependentsTree>,
    /// How the flat result was computed
    pub strategy: ResolutionStrategy,
    /// Targets that did not resolve and were queried as placeholders
    pub unresolved_targets: Vec<String>,
}

impl UsesResponse {
    pub fn flat(
        dependents: Vec<String>,
        strategy: ResolutionStrategy,
        unresolved_targets: Vec<String>,
    ) -> Self {
        Self {
            dependents,
            tree: None,
            strategy,
            unresolved_targets,
        }
    }

    pub fn tree(tree: DependentsTree, unresolved_targets: Vec<String>) -> Self {
        Self {
            dependents: Vec::new(),
            tree: Some(tree),
            strategy: ResolutionStrategy::FullScan,
            unresolved_targets,
        }
    }
}
