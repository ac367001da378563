use crate::application::dto::{OutputMode, UsesRequest, UsesResponse};
use crate::dependents::domain::Target;
use crate::dependents::policies::ResolutionStrategy;
use crate::dependents::services::{DependentsResolver, DependentsTreeBuilder, ResolveOptions};
use crate::ports::outbound::{PackageRegistry, ProgressReporter};
use crate::shared::error::UsesError;
use crate::shared::Result;
use tracing::debug;

/// FindDependentsUseCase - Core use case answering "which packages use these?"
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct FindDependentsUseCase<R, PR> {
    registry: R,
    progress_reporter: PR,
}

impl<R, PR> FindDependentsUseCase<R, PR>
where
    R: PackageRegistry,
    PR: ProgressReporter,
{
    /// Creates a new FindDependentsUseCase with injected dependencies
    pub fn new(registry: R, progress_reporter: PR) -> Self {
        Self {
            registry,
            progress_reporter,
        }
    }

    /// Executes the dependents query
    ///
    /// # Arguments
    /// * `request` - Targets plus the resolution and output options
    ///
    /// # Returns
    /// UsesResponse holding either the sorted dependents or the tree
    ///
    /// # Errors
    /// Returns `UsesError::InconsistentResult` when a target that does not
    /// exist is still reported as having dependents (flat mode only)
    pub fn execute(&self, request: UsesRequest) -> Result<UsesResponse> {
        // Step 1: Deprecated selectors only warn
        for option in request.deprecated_options() {
            self.progress_reporter.report_warning(&format!(
                "Calling {} is deprecated! There is no replacement.",
                option
            ));
        }

        // Step 2: Resolve targets, substituting placeholders
        let targets = self.resolve_targets(&request.targets);
        let unresolved_targets: Vec<String> = targets
            .iter()
            .filter(|t| t.is_placeholder())
            .map(|t| t.name().to_string())
            .collect();

        let options = ResolveOptions {
            recursive: request.recursive,
            installed_only: request.installed_only,
            policy: request.policy,
        };

        // Step 3: Tree or flat
        match request.output_mode {
            OutputMode::Tree => {
                let tree = DependentsTreeBuilder::build(&self.registry, &targets, &options);
                debug!(
                    roots = tree.roots().len(),
                    nodes = tree.node_count(),
                    circular = tree.circular_count(),
                    "built dependents tree"
                );
                Ok(UsesResponse::tree(tree, unresolved_targets))
            }
            OutputMode::Flat => self.resolve_flat(&request, &targets, &options, unresolved_targets),
        }
    }

    fn resolve_targets(&self, names: &[String]) -> Vec<Target<'_>> {
        names
            .iter()
            .map(|name| match self.registry.resolve(name) {
                Some(package) => {
                    debug!(query = name.as_str(), full_name = package.full_name(), "resolved target");
                    Target::Resolved(package)
                }
                None => {
                    self.progress_reporter.report_warning(&format!(
                        "No available package with the name \"{}\"",
                        name
                    ));
                    Target::Placeholder(name.clone())
                }
            })
            .collect()
    }

    fn resolve_flat(
        &self,
        request: &UsesRequest,
        targets: &[Target<'_>],
        options: &ResolveOptions,
        unresolved_targets: Vec<String>,
    ) -> Result<UsesResponse> {
        let strategy = ResolutionStrategy::select(request.query_mode(), &request.policy, targets);
        debug!(%strategy, targets = targets.len(), "resolving dependents");

        let mut on_progress = |current: usize, total: usize| {
            self.progress_reporter
                .report_progress(current, total, Some("Checking candidates"));
        };
        let found = DependentsResolver::resolve_with_progress(
            &self.registry,
            targets,
            options,
            strategy,
            &mut on_progress,
        );

        let mut dependents: Vec<String> = found.iter().map(|p| p.full_name().to_string()).collect();
        dependents.sort();
        debug!(count = dependents.len(), "resolved dependents");

        if !dependents.is_empty() && !unresolved_targets.is_empty() {
            return Err(UsesError::InconsistentResult {
                targets: unresolved_targets,
            }
            .into());
        }

        Ok(UsesResponse::flat(dependents, strategy, unresolved_targets))
    }
}
