//! # CarbonAtlas API Server
//!
//! HTTP API for the CarbonAtlas clean-energy project catalog:
//!
//! - `app`: application state, router assembly, auth middleware
//! - `config`: environment-driven configuration
//! - `error`: unified API error type and HTTP mapping
//! - `routes`: request handlers (auth, projects, locations, geocoding)

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
