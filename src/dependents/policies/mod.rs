mod filter_policy;
mod resolution_strategy;

pub use filter_policy::FilterPolicy;
pub use resolution_strategy::{QueryMode, ResolutionStrategy};
