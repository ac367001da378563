/// Registry adapters providing the package universe
mod in_memory_registry;

pub use in_memory_registry::InMemoryRegistry;
