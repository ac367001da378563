/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package storage, console, output).
pub mod formatter;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod registry_reader;

pub use formatter::DependentsFormatter;
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use registry_reader::{PackageIndex, RegistryReader, DEFAULT_NAMESPACE};
