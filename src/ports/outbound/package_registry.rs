use crate::dependents::domain::Package;

/// PackageRegistry port giving read access to the package universe
///
/// Every lookup is synchronous and answers with a value or a documented
/// absence (`None`); implementations never fail a lookup with an error.
pub trait PackageRegistry {
    /// Resolves a user-supplied name (bare or namespace-qualified) to a package
    fn resolve(&self, name: &str) -> Option<&Package>;

    /// Resolves a namespace-qualified reference to the canonical full name
    ///
    /// # Returns
    /// `None` when the namespace or the package is not available locally
    fn resolve_qualified_name(&self, reference: &str) -> Option<String>;

    /// Installed packages whose declared edges reference `package` under the
    /// default dependency kinds
    ///
    /// # Returns
    /// `None` when the registry keeps no reverse index for this package
    fn reverse_dependents(&self, package: &Package) -> Option<Vec<&Package>>;

    /// Every known package, in pool order
    fn all_packages(&self) -> Vec<&Package>;

    /// Packages with any version installed, in pool order
    fn installed_packages(&self) -> Vec<&Package>;
}
