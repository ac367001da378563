/// Application layer - Use cases and DTOs
///
/// This layer turns a dependents query into domain service calls and hands
/// the result to infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
