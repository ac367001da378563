use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputMode;
use crate::dependents::policies::FilterPolicy;

/// Show packages that specify the given packages as a dependency
///
/// When given multiple packages, show those that use all of them.
#[derive(Parser, Debug)]
#[command(name = "pkg-uses")]
#[command(version)]
#[command(about = "Show packages that use the given packages", long_about = None)]
pub struct Args {
    /// Packages to look up; a dependent must use every one of them
    #[arg(required = true, value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Resolve more than one level of dependencies
    #[arg(short, long)]
    pub recursive: bool,

    /// Only list installed packages
    #[arg(long)]
    pub installed: bool,

    /// Include packages that use the given packages as build dependencies
    #[arg(long)]
    pub include_build: bool,

    /// Include packages that use the given packages as test dependencies
    #[arg(long)]
    pub include_test: bool,

    /// Include packages that use the given packages as optional dependencies
    #[arg(long)]
    pub include_optional: bool,

    /// Skip packages that only recommend the given packages
    #[arg(long)]
    pub skip_recommended: bool,

    /// Show dependents as a tree
    #[arg(long)]
    pub tree: bool,

    /// Deprecated, has no effect
    #[arg(long, conflicts_with = "head")]
    pub devel: bool,

    /// Deprecated, has no effect
    #[arg(long = "HEAD")]
    pub head: bool,

    /// Package index file (TOML or JSON) [default: packages.toml]
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Path to a config file (default: pkg-uses.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Filter policy from the command-line switches alone
    pub fn policy(&self) -> FilterPolicy {
        FilterPolicy::new(
            self.include_build,
            self.include_test,
            self.include_optional,
            self.skip_recommended,
        )
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_tree_flag(self.tree)
    }
}
