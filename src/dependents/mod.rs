/// Dependents domain - packages, dependency edges, policies and the
/// services that find which packages use which
pub mod domain;
pub mod policies;
pub mod services;
