//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ProblemAppState;
pub use router::{problem_router, problem_router_generic};
