/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the package
/// index on disk, the in-memory registry, formatters and console output.
pub mod outbound;
