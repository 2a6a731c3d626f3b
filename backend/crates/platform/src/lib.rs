//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, tunable cost)
//! - Access token signing and verification (HS256 JWT)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;
