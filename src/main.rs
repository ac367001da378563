use anyhow::Context;
use pkg_uses::adapters::outbound::console::StderrProgressReporter;
use pkg_uses::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use pkg_uses::adapters::outbound::registry::InMemoryRegistry;
use pkg_uses::application::dto::UsesRequest;
use pkg_uses::application::factories::FormatterFactory;
use pkg_uses::application::use_cases::FindDependentsUseCase;
use pkg_uses::cli::Args;
use pkg_uses::config::{self, ConfigFile};
use pkg_uses::ports::outbound::{OutputPresenter, ProgressReporter, RegistryReader};
use pkg_uses::shared::error::{ExitCode, UsesError};
use pkg_uses::shared::Result;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.debug);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        let exit_code = e
            .downcast_ref::<UsesError>()
            .map(UsesError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(exit_code.as_i32());
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();

    // Load config: explicit path, else auto-discovered in the working directory
    let config = load_config(&args, &progress_reporter)?.unwrap_or_default();

    let policy = config.merge_policy(args.policy());
    let installed_only = config.merge_installed(args.installed);
    let registry_path = config.registry_path(args.registry.as_deref());
    debug!(registry = %registry_path.display(), ?policy, installed_only, "effective options");

    // Load the package universe
    let index = FileSystemReader::new().read_package_index(&registry_path)?;
    let registry = InMemoryRegistry::new(index.default_namespace, index.packages)
        .with_context(|| format!("Invalid package index: {}", registry_path.display()))?;
    debug!(packages = registry.len(), "loaded package index");

    let request = UsesRequest::builder()
        .targets(args.packages.iter().cloned())
        .recursive(args.recursive)
        .installed_only(installed_only)
        .output_mode(args.output_mode())
        .policy(policy)
        .devel(args.devel)
        .head(args.head)
        .build()?;
    let output_mode = request.output_mode;

    let use_case = FindDependentsUseCase::new(registry, progress_reporter);
    let response = use_case.execute(request)?;

    let formatter = FormatterFactory::create(output_mode, terminal_width());
    let formatted_output = formatter.format(&response)?;

    StdoutPresenter::new().present(&formatted_output)?;

    Ok(())
}

fn load_config(args: &Args, reporter: &impl ProgressReporter) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(path).map(Some);
    }

    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let discovered = config::discover_config(&cwd)?;
    if discovered.is_some() {
        reporter.report(&format!(
            "📄 Auto-discovered config file: {}",
            cwd.join(config::CONFIG_FILENAME).display()
        ));
    }
    Ok(discovered)
}

/// Width of stdout when it is a terminal
fn terminal_width() -> Option<usize> {
    let term = console::Term::stdout();
    if !term.is_term() {
        return None;
    }
    let (_rows, cols) = term.size();
    Some(usize::from(cols))
}
