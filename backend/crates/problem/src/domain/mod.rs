//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Problem)
//! - Domain value objects (ProblemFields)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
