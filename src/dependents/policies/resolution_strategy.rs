use super::FilterPolicy;
use crate::dependents::domain::Target;

/// Query flags that influence how dependents are looked up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryMode {
    pub recursive: bool,
    pub installed_only: bool,
    pub tree: bool,
}

/// ResolutionStrategy policy choosing between the reverse index and a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Intersect the registry's precomputed reverse-dependents index
    ReverseIndex,
    /// Expand and match every candidate in the pool
    FullScan,
}

impl ResolutionStrategy {
    /// Selects the reverse index only when its answer equals a full scan's:
    /// installed packages, real targets, flat output, one level deep and the
    /// default dependency kinds.
    pub fn select(mode: QueryMode, policy: &FilterPolicy, targets: &[Target<'_>]) -> Self {
        let eligible = mode.installed_only
            && !mode.tree
            && !mode.recursive
            && policy.is_default()
            && targets.iter().all(|t| !t.is_placeholder());

        if eligible {
            ResolutionStrategy::ReverseIndex
        } else {
            ResolutionStrategy::FullScan
        }
    }
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionStrategy::ReverseIndex => write!(f, "reverse index"),
            ResolutionStrategy::FullScan => write!(f, "full scan"),
        }
    }
}
