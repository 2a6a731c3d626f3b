//! Problem Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Contract
//! - The store assigns each problem its key; clients only see it as `id`
//! - A malformed id behaves exactly like a missing one
//! - An update that changes nothing is reported as not found
//! - Listing returns at most [`application::LIST_PAGE_SIZE`] records

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProblemError, ProblemResult};
pub use infra::memory::InMemoryProblemRepository;
pub use infra::postgres::PgProblemRepository;
pub use presentation::router::{problem_router, problem_router_generic};

#[cfg(test)]
mod tests;
