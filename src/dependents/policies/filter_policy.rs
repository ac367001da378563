use crate::dependents::domain::DependencyKind;

/// FilterPolicy deciding which dependency kinds count as "uses"
///
/// Required edges always count. Recommended edges count unless skipped.
/// Build, test and optional edges only count when explicitly included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    pub include_build: bool,
    pub include_test: bool,
    pub include_optional: bool,
    pub skip_recommended: bool,
}

impl FilterPolicy {
    pub fn new(
        include_build: bool,
        include_test: bool,
        include_optional: bool,
        skip_recommended: bool,
    ) -> Self {
        Self {
            include_build,
            include_test,
            include_optional,
            skip_recommended,
        }
    }

    /// Returns true if an edge of this kind counts under the policy
    pub fn counts(&self, kind: DependencyKind) -> bool {
        match kind {
            DependencyKind::Required => true,
            DependencyKind::Build => self.include_build,
            DependencyKind::Test => self.include_test,
            DependencyKind::Optional => self.include_optional,
            DependencyKind::Recommended => !self.skip_recommended,
        }
    }

    /// True when no kind override or skip flag is set
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [DependencyKind; 5] = [
        DependencyKind::Required,
        DependencyKind::Build,
        DependencyKind::Test,
        DependencyKind::Optional,
        DependencyKind::Recommended,
    ];

    #[test]
    fn test_default_policy_counts_required_and_recommended() {
        let policy = FilterPolicy::default();
        assert!(policy.counts(DependencyKind::Required));
        assert!(policy.counts(DependencyKind::Recommended));
        assert!(!policy.counts(DependencyKind::Build));
        assert!(!policy.counts(DependencyKind::Test));
        assert!(!policy.counts(DependencyKind::Optional));
        assert!(policy.is_default());
    }

    #[test]
    fn test_include_flags() {
        let policy = FilterPolicy::new(true, true, true, false);
        for kind in ALL_KINDS {
            assert!(policy.counts(kind), "{} should count", kind);
        }
        assert!(!policy.is_default());
    }

    #[test]
    fn test_skip_recommended() {
        let policy = FilterPolicy::new(false, false, false, true);
        assert!(!policy.counts(DependencyKind::Recommended));
        assert!(policy.counts(DependencyKind::Required));
        assert!(!policy.is_default());
    }

    #[test]
    fn test_required_always_counts() {
        for bits in 0..16u8 {
            let policy = FilterPolicy::new(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            );
            assert!(policy.counts(DependencyKind::Required));
        }
    }

    #[test]
    fn test_include_flags_are_monotonic() {
        let base = FilterPolicy::default();
        let widened = [
            FilterPolicy::new(true, false, false, false),
            FilterPolicy::new(false, true, false, false),
            FilterPolicy::new(false, false, true, false),
        ];
        for policy in widened {
            for kind in ALL_KINDS {
                if base.counts(kind) {
                    assert!(policy.counts(kind));
                }
            }
        }
    }
}
