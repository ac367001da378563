use super::OutputMode;
use crate::dependents::policies::{FilterPolicy, QueryMode};
use crate::shared::error::UsesError;
use crate::shared::Result;

/// UsesRequest - Internal request DTO for the find-dependents use case
///
/// Built through [`UsesRequest::builder`], which validates the targets and
/// the deprecated version selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsesRequest {
    /// Target names as typed by the user, in order
    pub targets: Vec<String>,
    /// Expand dependency edges transitively
    pub recursive: bool,
    /// Restrict the candidate pool to installed packages
    pub installed_only: bool,
    /// Flat list or nested tree
    pub output_mode: OutputMode,
    /// Which dependency kinds count
    pub policy: FilterPolicy,
    /// Deprecated `--devel` selector; warning only
    pub devel: bool,
    /// Deprecated `--HEAD` selector; warning only
    pub head: bool,
}

impl UsesRequest {
    pub fn builder() -> UsesRequestBuilder {
        UsesRequestBuilder::default()
    }

    pub fn query_mode(&self) -> QueryMode {
        QueryMode {
            recursive: self.recursive,
            installed_only: self.installed_only,
            tree: self.output_mode == OutputMode::Tree,
        }
    }

    /// Names of the deprecated options that were set, in flag order
    pub fn deprecated_options(&self) -> Vec<&'static str> {
        let mut options = Vec::new();
        if self.devel {
            options.push("--devel");
        }
        if self.head {
            options.push("--HEAD");
        }
        options
    }
}

/// Builder for [`UsesRequest`]
#[derive(Debug, Default)]
pub struct UsesRequestBuilder {
    targets: Vec<String>,
    recursive: bool,
    installed_only: bool,
    output_mode: OutputMode,
    policy: FilterPolicy,
    devel: bool,
    head: bool,
}

impl UsesRequestBuilder {
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.targets.push(name.into());
        self
    }

    pub fn targets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn installed_only(mut self, installed_only: bool) -> Self {
        self.installed_only = installed_only;
        self
    }

    pub fn output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    pub fn policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn devel(mut self, devel: bool) -> Self {
        self.devel = devel;
        self
    }

    pub fn head(mut self, head: bool) -> Self {
        self.head = head;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `UsesError::Validation` when no target is given, a target
    /// name is blank, or both `devel` and `head` are set
    pub fn build(self) -> Result<UsesRequest> {
        if self.targets.is_empty() {
            return Err(UsesError::Validation {
                message: "At least one package name is required".to_string(),
            }
            .into());
        }

        if self.targets.iter().any(|t| t.trim().is_empty()) {
            return Err(UsesError::Validation {
                message: "Package names cannot be empty".to_string(),
            }
            .into());
        }

        if self.devel && self.head {
            return Err(UsesError::Validation {
                message: "--devel and --HEAD cannot be used together".to_string(),
            }
            .into());
        }

        Ok(UsesRequest {
            targets: self.targets,
            recursive: self.recursive,
            installed_only: self.installed_only,
            output_mode: self.output_mode,
            policy: self.policy,
            devel: self.devel,
            head: self.head,
        })
    }
}
