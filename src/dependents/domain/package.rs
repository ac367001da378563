use super::Dependency;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Separator between a namespace and a bare package name
pub const NAMESPACE_SEPARATOR: char = '/';

/// NewType wrapper for a bare package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Names such as "openssl@3" and "c++-utils" are legal; separators are not
        if !name.chars().all(|c| {
            c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '+' || c == '@'
        }) {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, plus and at signs are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Package entity in the dependency graph
///
/// `full_name` equals the bare name for packages from the default namespace
/// and `namespace/name` otherwise. It is the package's identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    name: PackageName,
    namespace: Option<String>,
    full_name: String,
    dependencies: Vec<Dependency>,
    installed: bool,
}

impl Package {
    /// Creates a package from the default namespace
    pub fn new(name: String, dependencies: Vec<Dependency>, installed: bool) -> Result<Self> {
        let name = PackageName::new(name)?;
        Ok(Self {
            full_name: name.as_str().to_string(),
            name,
            namespace: None,
            dependencies,
            installed,
        })
    }

    /// Creates a package sourced from a non-default namespace
    pub fn namespaced(
        namespace: String,
        name: String,
        dependencies: Vec<Dependency>,
        installed: bool,
    ) -> Result<Self> {
        validate_namespace(&namespace)?;
        let name = PackageName::new(name)?;
        Ok(Self {
            full_name: format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, name),
            name,
            namespace: Some(namespace),
            dependencies,
            installed,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Namespace, or None for packages from the default namespace
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Declared dependency edges in declaration order
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn any_version_installed(&self) -> bool {
        self.installed
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        anyhow::bail!("Package namespace cannot be empty");
    }
    if namespace.starts_with(NAMESPACE_SEPARATOR) || namespace.ends_with(NAMESPACE_SEPARATOR) {
        anyhow::bail!(
            "Package namespace '{}' cannot start or end with '{}'",
            namespace,
            NAMESPACE_SEPARATOR
        );
    }
    Ok(())
}
