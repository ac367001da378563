use super::Package;

/// A query target: a resolved package or a stand-in for a name the
/// registry could not resolve
#[derive(Debug, Clone, PartialEq)]
pub enum Target<'a> {
    Resolved(&'a Package),
    /// Carries only the name the user asked for; its full name is the same string
    Placeholder(String),
}

impl<'a> Target<'a> {
    pub fn name(&self) -> &str {
        match self {
            Target::Resolved(package) => package.name(),
            Target::Placeholder(name) => name,
        }
    }

    pub fn full_name(&self) -> &str {
        match self {
            Target::Resolved(package) => package.full_name(),
            Target::Placeholder(name) => name,
        }
    }

    pub fn package(&self) -> Option<&'a Package> {
        match self {
            Target::Resolved(package) => Some(package),
            Target::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Target::Placeholder(_))
    }
}
