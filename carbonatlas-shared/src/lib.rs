//! # CarbonAtlas Shared Library
//!
//! Shared types and utilities used across the CarbonAtlas API server:
//!
//! - `models`: database models and CRUD operations
//! - `auth`: password hashing and session token primitives
//! - `db`: connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the CarbonAtlas shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
