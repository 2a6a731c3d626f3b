//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign up with `user_id` + password
//! - Login issuing a short-lived signed access token in a cookie
//! - Stateless token verification for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear text
//! - Unknown user and wrong password are indistinguishable to the client
//! - Tokens are HS256 JWTs valid for five minutes, no server-side sessions

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthenticatedUser, require_access_token};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
