/// Data Transfer Objects for application layer
///
/// DTOs carry a query into the use case and its result back out to the
/// formatters, keeping the domain layer isolated.
mod output_mode;
mod uses_request;
mod uses_response;

pub use output_mode::OutputMode;
pub use uses_request::{UsesRequest, UsesRequestBuilder};
pub use uses_response::UsesResponse;
