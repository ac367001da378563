/// Use cases module containing application business logic orchestration
mod find_dependents;

pub use find_dependents::FindDependentsUseCase;
