use super::package::NAMESPACE_SEPARATOR;

/// Why a dependency edge exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    /// Needed at runtime (the default)
    Required,
    /// Needed only to build the package
    Build,
    /// Needed only to run the package's tests
    Test,
    /// Only used when the package is built with the matching option
    Optional,
    /// Used by default, can be opted out of
    Recommended,
}

impl std::str::FromStr for DependencyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "required" | "runtime" => Ok(DependencyKind::Required),
            "build" => Ok(DependencyKind::Build),
            "test" => Ok(DependencyKind::Test),
            "optional" => Ok(DependencyKind::Optional),
            "recommended" => Ok(DependencyKind::Recommended),
            _ => Err(format!(
                "Invalid dependency kind: {}. Expected one of 'required', 'build', 'test', 'optional', 'recommended'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyKind::Required => write!(f, "required"),
            DependencyKind::Build => write!(f, "build"),
            DependencyKind::Test => write!(f, "test"),
            DependencyKind::Optional => write!(f, "optional"),
            DependencyKind::Recommended => write!(f, "recommended"),
        }
    }
}

/// A directed edge from a package to the package named by `reference`
///
/// The reference is either a bare name (`openssl@3`) or qualified with a
/// namespace (`acme/tools/zlib-ng`); the namespace is everything before the
/// last separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    reference: String,
    kind: DependencyKind,
}

impl Dependency {
    pub fn new(reference: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            reference: reference.into(),
            kind,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn is_qualified(&self) -> bool {
        self.reference.contains(NAMESPACE_SEPARATOR)
    }

    /// The reference without its namespace
    pub fn bare_name(&self) -> &str {
        split_qualified(&self.reference).map_or(self.reference.as_str(), |(_, name)| name)
    }
}

/// Splits `namespace/name` at the last separator
pub fn split_qualified(reference: &str) -> Option<(&str, &str)> {
    reference.rsplit_once(NAMESPACE_SEPARATOR)
}
