use crate::dependents::domain::{Dependency, Target};
use crate::ports::outbound::PackageRegistry;

/// NameMatcher service deciding whether a dependency edge refers to a target
///
/// Qualified references are compared by canonical full name and only when
/// the registry can resolve them; a namespace that is not available locally
/// makes the edge a non-match. Bare references are compared by bare name.
pub struct NameMatcher;

impl NameMatcher {
    pub fn matches<R: PackageRegistry + ?Sized>(
        registry: &R,
        dependency: &Dependency,
        target: &Target<'_>,
    ) -> bool {
        if dependency.is_qualified() {
            return registry
                .resolve_qualified_name(dependency.reference())
                .is_some_and(|full_name| full_name == target.full_name());
        }

        dependency.reference() == target.name()
    }
}
